use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use crate::config::{LoggingConfig, Settings};
use crate::utils::{SettingsError, SettingsResult};

/// Initialize the logging system from the configured logger thresholds.
///
/// `RUST_LOG`, when set, takes precedence over the configured levels. The
/// `verbose` formatter adds timestamps, targets and thread ids; anything else
/// gets compact output. Events go to stderr so stdout stays free for the
/// `--json` snapshot.
pub fn init_logging(config: &LoggingConfig) -> SettingsResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    let result = if config.console_formatter() == Some("verbose") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_timer(ChronoLocal::rfc_3339())
            .with_level(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .try_init()
    };

    result.map_err(|e| SettingsError::Logging(e.to_string()))
}

/// Log the resolved settings without secrets
pub fn log_settings_summary(settings: &Settings) {
    tracing::info!(
        environment = ?settings.environment,
        debug = settings.debug,
        allowed_hosts = ?settings.allowed_hosts.as_slice(),
        ssl_redirect = settings.security.ssl_redirect,
        static_root = %settings.static_files.root.display(),
        cors_origins = settings.cors.allowed_origins.len(),
        csrf_origins = settings.csrf.trusted_origins.len(),
        session_age = settings.session.cookie_age,
        email_backend = %settings.email.backend,
        "Settings loaded"
    );
}

/// Re-emit warnings recorded while loading, once a subscriber exists
pub fn log_settings_warnings(settings: &Settings) {
    for warning in &settings.warnings {
        tracing::warn!(warning = ?warning, "{}", warning);
    }
}
