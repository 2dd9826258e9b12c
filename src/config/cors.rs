use serde::Serialize;

use super::env::{split_list, EnvVars};

pub const CORS_ALLOW_METHODS: &[&str] = &["DELETE", "GET", "OPTIONS", "PATCH", "POST", "PUT"];

pub const CORS_ALLOW_HEADERS: &[&str] = &[
    "accept",
    "accept-encoding",
    "authorization",
    "cache-control",
    "content-type",
    "dnt",
    "origin",
    "user-agent",
    "x-csrftoken",
    "x-requested-with",
    "cookie",
    "x-app-type",
];

/// Frontends served by the development stack
pub const DEVELOPMENT_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3001",
];

/// Cross-origin request policy.
///
/// An empty origin list permits no cross-origin requests.
#[derive(Debug, Clone, Serialize)]
pub struct CorsConfig {
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Accept any origin, ignoring the list
    pub allow_all_origins: bool,
    /// Allow cookies on cross-origin requests
    pub allow_credentials: bool,
    /// Methods accepted in preflight
    pub allow_methods: Vec<String>,
    /// Request headers accepted in preflight
    pub allow_headers: Vec<String>,
}

impl CorsConfig {
    fn with_origins(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            allow_all_origins: false,
            allow_credentials: true,
            allow_methods: CORS_ALLOW_METHODS.iter().map(|m| m.to_string()).collect(),
            allow_headers: CORS_ALLOW_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub(crate) fn production(env: &EnvVars) -> Self {
        Self::with_origins(split_list(env.cors_allowed_origins.as_deref()))
    }

    pub(crate) fn development() -> Self {
        Self::with_origins(DEVELOPMENT_ORIGINS.iter().map(|o| o.to_string()).collect())
    }
}

/// CSRF protection settings
#[derive(Debug, Clone, Serialize)]
pub struct CsrfConfig {
    /// Origins allowed to send unsafe requests in addition to the framework defaults
    pub trusted_origins: Vec<String>,
    /// Only send the CSRF cookie over HTTPS
    pub cookie_secure: bool,
}

impl CsrfConfig {
    pub(crate) fn production(env: &EnvVars) -> Self {
        Self {
            trusted_origins: split_list(env.csrf_trusted_origins.as_deref()),
            cookie_secure: true,
        }
    }

    pub(crate) fn development() -> Self {
        Self {
            trusted_origins: Vec::new(),
            cookie_secure: false,
        }
    }
}
