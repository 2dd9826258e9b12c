use std::path::PathBuf;

use serde::Serialize;

use super::env::EnvVars;

pub const STATIC_MIDDLEWARE: &str = "whitenoise.middleware.WhiteNoiseMiddleware";
pub const STATIC_STORAGE: &str = "whitenoise.storage.CompressedManifestStaticFilesStorage";
pub const DEFAULT_STATIC_ROOT: &str = "/app/staticfiles";

/// Middleware chain shared by every profile, outermost first
pub const BASE_MIDDLEWARE: &[&str] = &[
    "corsheaders.middleware.CorsMiddleware",
    "django.middleware.security.SecurityMiddleware",
    "core.middleware.IPRestrictionMiddleware",
    "core.middleware.AppSpecificSessionMiddleware",
    "django.contrib.sessions.middleware.SessionMiddleware",
    "django.middleware.common.CommonMiddleware",
    "core.middleware.CsrfExemptApiMiddleware",
    "core.middleware.CsrfViewMiddlewareExempt",
    "django.contrib.auth.middleware.AuthenticationMiddleware",
    "django.contrib.messages.middleware.MessageMiddleware",
    "django.middleware.clickjacking.XFrameOptionsMiddleware",
];

/// Ordered middleware identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MiddlewareChain(Vec<String>);

impl MiddlewareChain {
    pub fn base() -> Self {
        Self(BASE_MIDDLEWARE.iter().map(|m| m.to_string()).collect())
    }

    /// Insert at `index`, or append when the chain is shorter
    pub fn insert(&mut self, index: usize, middleware: &str) {
        let index = index.min(self.0.len());
        self.0.insert(index, middleware.to_string());
    }

    pub fn position(&self, middleware: &str) -> Option<usize> {
        self.0.iter().position(|m| m == middleware)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Collected static asset serving
#[derive(Debug, Clone, Serialize)]
pub struct StaticFilesConfig {
    /// URL prefix static files are served under
    pub url: String,
    /// Directory static files are collected into
    pub root: PathBuf,
    /// Extra source directories searched when collecting
    pub dirs: Vec<PathBuf>,
    /// Storage backend identifier, `None` keeps the framework default
    pub storage: Option<String>,
    /// Re-scan files on every request
    pub autorefresh: bool,
}

impl StaticFilesConfig {
    fn base() -> Self {
        Self {
            url: "/static/".to_string(),
            root: PathBuf::from("staticfiles"),
            dirs: vec![PathBuf::from("static")],
            storage: None,
            autorefresh: false,
        }
    }

    /// Compressed, hashed assets served by the static middleware, which is
    /// placed right after the CORS middleware.
    pub(crate) fn production(env: &EnvVars, middleware: &mut MiddlewareChain) -> Self {
        middleware.insert(1, STATIC_MIDDLEWARE);

        Self {
            root: env
                .static_root
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_ROOT)),
            storage: Some(STATIC_STORAGE.to_string()),
            ..Self::base()
        }
    }

    pub(crate) fn development() -> Self {
        Self::base()
    }
}

/// User-uploaded files
#[derive(Debug, Clone, Serialize)]
pub struct MediaConfig {
    /// URL prefix uploads are served under
    pub url: String,
    /// Directory uploads are stored in
    pub root: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            url: "/media/".to_string(),
            root: PathBuf::from("media"),
        }
    }
}
