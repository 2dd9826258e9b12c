//! Adapters that hand the settings to the serving layer.
//! Nothing here binds a socket; it only converts policy into
//! `tower-http` layers and HTTP header values.

mod cors;
mod security;

pub use cors::cors_layer;
pub use security::{https_redirect, is_secure_request, security_headers};
