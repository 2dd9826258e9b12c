//! Deployment settings loader for the time tracking backend.
//!
//! Settings are read from the environment exactly once, at process start, into
//! an immutable [`config::Settings`] snapshot that the serving layer receives by
//! reference.

pub mod config;
pub mod middleware;
pub mod utils;

pub use config::{load_config, Settings};
pub use utils::{SettingsError, SettingsResult};
