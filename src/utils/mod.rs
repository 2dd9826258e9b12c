//! Utility modules for the settings loader.
//! This module contains error types and logging setup shared by the
//! library and the binary.

mod error;
mod logging;

pub use logging::{init_logging, log_settings_summary, log_settings_warnings};

pub use error::{SettingsError, SettingsResult};
