use serde::Serialize;

use super::env::EnvVars;

pub const LOCMEM_CACHE: &str = "django.core.cache.backends.locmem.LocMemCache";
pub const CONSOLE_EMAIL_BACKEND: &str = "django.core.mail.backends.console.EmailBackend";

/// The `default` cache alias. Always in-process; no external cache is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Cache backend identifier
    pub backend: String,
    /// Instance name for the in-process cache
    pub location: String,
}

impl CacheConfig {
    pub(crate) fn production() -> Self {
        Self {
            backend: LOCMEM_CACHE.to_string(),
            location: "unique-snowflake".to_string(),
        }
    }

    pub(crate) fn development() -> Self {
        Self {
            backend: LOCMEM_CACHE.to_string(),
            location: String::new(),
        }
    }
}

/// Mail-sending strategy, selected by identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailConfig {
    /// Email backend identifier
    pub backend: String,
}

impl EmailConfig {
    pub(crate) fn production(env: &EnvVars) -> Self {
        Self {
            backend: env
                .email_backend
                .clone()
                .unwrap_or_else(|| CONSOLE_EMAIL_BACKEND.to_string()),
        }
    }

    pub(crate) fn development() -> Self {
        Self {
            backend: CONSOLE_EMAIL_BACKEND.to_string(),
        }
    }

    /// Whether mail is only printed rather than delivered
    pub fn is_console(&self) -> bool {
        self.backend == CONSOLE_EMAIL_BACKEND
    }
}
