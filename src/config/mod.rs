//! Deployment settings.
//! This module reads the environment once at startup and produces an
//! immutable `Settings` snapshot for the serving layer.

pub mod application;
pub mod assets;
pub mod backends;
pub mod cors;
pub mod database;
pub mod env;
pub mod hosts;
pub mod logging;
pub mod security;
pub mod session;
mod settings;

pub use application::{ApplicationConfig, RestFrameworkConfig};
pub use assets::{MediaConfig, MiddlewareChain, StaticFilesConfig};
pub use backends::{CacheConfig, EmailConfig};
pub use cors::{CorsConfig, CsrfConfig};
pub use database::{DatabaseConfig, DatabaseConnection, DatabaseEngine, DatabaseSource};
pub use env::EnvVars;
pub use hosts::AllowedHosts;
pub use logging::{LogLevel, LoggingConfig};
pub use security::{FrameOptions, SecurityConfig};
pub use session::{AppSessionConfig, AppType, SameSite, SessionConfig};
pub use settings::{Environment, SecretKey, Settings, SettingsWarning};

use crate::utils::SettingsResult;

/// Load the deployment settings
pub fn load_config() -> SettingsResult<Settings> {
    Settings::load()
}
