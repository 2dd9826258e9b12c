//! Raw environment access and the parsing rules shared by every settings section.

use serde::Deserialize;

use crate::utils::{SettingsError, SettingsResult};

pub const DJANGO_ENV: &str = "DJANGO_ENV";
pub const DJANGO_SECRET_KEY: &str = "DJANGO_SECRET_KEY";
pub const SESSION_COOKIE_AGE: &str = "SESSION_COOKIE_AGE";
pub const HUB_ABSOLUTE_SESSION_AGE: &str = "HUB_ABSOLUTE_SESSION_AGE";
pub const DB_PORT: &str = "DB_PORT";

/// Names of every variable [`EnvVars`] holds
const KNOWN_VARS: &[&str] = &[
    "DJANGO_ENV",
    "DJANGO_SECRET_KEY",
    "SECURE_SSL_REDIRECT",
    "DJANGO_ALLOWED_HOSTS",
    "RAILWAY_PUBLIC_DOMAIN",
    "DATABASE_URL",
    "DB_NAME",
    "DB_USER",
    "DB_PASSWORD",
    "DB_HOST",
    "DB_PORT",
    "STATIC_ROOT",
    "CORS_ALLOWED_ORIGINS",
    "CSRF_TRUSTED_ORIGINS",
    "SESSION_COOKIE_AGE",
    "SESSION_EXPIRE_AT_BROWSER_CLOSE",
    "HUB_ABSOLUTE_SESSION_AGE",
    "DJANGO_LOG_LEVEL",
    "EMAIL_BACKEND",
];

/// Every environment variable the loader reads.
///
/// Field names are the lower-cased variable names, which is how
/// `config::Environment` keys them. Values are kept verbatim: a variable that
/// is set but empty is `Some("")`, not `None`.
#[derive(Debug, Default, Deserialize)]
pub struct EnvVars {
    pub django_env: Option<String>,
    pub django_secret_key: Option<String>,
    pub secure_ssl_redirect: Option<String>,
    pub django_allowed_hosts: Option<String>,
    pub railway_public_domain: Option<String>,
    pub database_url: Option<String>,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_host: Option<String>,
    pub db_port: Option<String>,
    pub static_root: Option<String>,
    pub cors_allowed_origins: Option<String>,
    pub csrf_trusted_origins: Option<String>,
    pub session_cookie_age: Option<String>,
    pub session_expire_at_browser_close: Option<String>,
    pub hub_absolute_session_age: Option<String>,
    pub django_log_level: Option<String>,
    pub email_backend: Option<String>,
}

impl EnvVars {
    fn collect(source: config::Environment) -> SettingsResult<Self> {
        let config = config::Config::builder().add_source(source).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Collect variables from the process environment.
    ///
    /// Entries that are not valid UTF-8 are skipped, unless the value belongs
    /// to a variable the loader reads, which fails with
    /// [`SettingsError::NonUnicode`].
    pub fn from_process() -> SettingsResult<Self> {
        let mut vars = config::Map::new();
        for (key, value) in std::env::vars_os() {
            let Some(key) = key.to_str() else {
                continue;
            };
            match value.into_string() {
                Ok(value) => {
                    vars.insert(key.to_string(), value);
                }
                Err(_) => {
                    let known = KNOWN_VARS.iter().copied().find(|v| v.eq_ignore_ascii_case(key));
                    if let Some(var) = known {
                        return Err(SettingsError::NonUnicode(var));
                    }
                }
            }
        }
        Self::from_map(vars)
    }

    /// Collect variables from an explicit map instead of the process environment
    pub fn from_map(vars: config::Map<String, String>) -> SettingsResult<Self> {
        Self::collect(config::Environment::default().source(Some(vars)))
    }
}

/// Split a comma-separated value into trimmed, non-empty entries.
///
/// Order is preserved and duplicates are kept.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A flag is true only when its value lower-cases to `"true"`
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => v.to_lowercase() == "true",
        None => default,
    }
}

/// Parse a signed decimal integer, falling back to `default` only when unset.
///
/// Range checks are left to the caller.
pub fn parse_int(var: &'static str, value: Option<&str>, default: i64) -> SettingsResult<i64> {
    let Some(raw) = value else {
        return Ok(default);
    };

    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SettingsError::InvalidInteger {
            var,
            value: raw.to_string(),
        });
    }

    trimmed.parse().map_err(|_| SettingsError::InvalidInteger {
        var,
        value: raw.to_string(),
    })
}

/// Read a variable that must be present and non-empty
pub fn require<'a>(var: &'static str, value: Option<&'a str>) -> SettingsResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SettingsError::MissingVar(var)),
    }
}
