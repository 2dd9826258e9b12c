use std::fmt;

use serde::Serialize;

use super::application::ApplicationConfig;
use super::assets::{MediaConfig, MiddlewareChain, StaticFilesConfig};
use super::backends::{CacheConfig, EmailConfig};
use super::cors::{CorsConfig, CsrfConfig};
use super::database::DatabaseConfig;
use super::env::{require, EnvVars, DJANGO_SECRET_KEY};
use super::hosts::AllowedHosts;
use super::logging::LoggingConfig;
use super::security::SecurityConfig;
use super::session::SessionConfig;
use crate::utils::SettingsResult;

/// Deployment profile, chosen by `DJANGO_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `"production"` in any case selects production; anything else, or
    /// nothing, selects development.
    pub fn from_env(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.to_lowercase() == "production" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Secret used for signing; never printed or serialized
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Misconfiguration the loader recovered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsWarning {
    /// No hosts were configured and the fallback list was substituted
    EmptyAllowedHosts,
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsWarning::EmptyAllowedHosts => {
                f.write_str("ALLOWED_HOSTS is empty; consider setting DJANGO_ALLOWED_HOSTS")
            }
        }
    }
}

/// Immutable settings snapshot, built once at process start
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub environment: Environment,
    pub debug: bool,
    #[serde(skip)]
    pub secret_key: SecretKey,
    pub application: ApplicationConfig,
    pub security: SecurityConfig,
    pub allowed_hosts: AllowedHosts,
    pub internal_ips: Vec<String>,
    pub database: DatabaseConfig,
    pub middleware: MiddlewareChain,
    pub static_files: StaticFilesConfig,
    pub media: MediaConfig,
    pub cors: CorsConfig,
    pub csrf: CsrfConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub cache: CacheConfig,
    pub email: EmailConfig,
    pub warnings: Vec<SettingsWarning>,
}

impl Settings {
    /// Load settings from a `.env` file, if any, and the process environment
    pub fn load() -> SettingsResult<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_env(&EnvVars::from_process()?)
    }

    /// Load settings from an explicit set of variables, ignoring the process environment
    pub fn from_vars<I, K, V>(vars: I) -> SettingsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_env(&EnvVars::from_map(vars)?)
    }

    /// Assemble the snapshot for the profile `DJANGO_ENV` selects
    pub fn from_env(env: &EnvVars) -> SettingsResult<Self> {
        let secret_key = require(DJANGO_SECRET_KEY, env.django_secret_key.as_deref())?;
        let secret_key = SecretKey(secret_key.to_string());

        match Environment::from_env(env.django_env.as_deref()) {
            Environment::Production => Self::production(env, secret_key),
            Environment::Development => Self::development(env, secret_key),
        }
    }

    fn production(env: &EnvVars, secret_key: SecretKey) -> SettingsResult<Self> {
        let mut warnings = Vec::new();
        let mut middleware = MiddlewareChain::base();

        let settings = Self {
            environment: Environment::Production,
            debug: false,
            secret_key,
            application: ApplicationConfig::default(),
            security: SecurityConfig::production(env)?,
            allowed_hosts: AllowedHosts::production(env, &mut warnings),
            internal_ips: Vec::new(),
            database: DatabaseConfig::production(env),
            static_files: StaticFilesConfig::production(env, &mut middleware),
            middleware,
            media: MediaConfig::default(),
            cors: CorsConfig::production(env),
            csrf: CsrfConfig::production(env),
            session: SessionConfig::production(env)?,
            logging: LoggingConfig::production(env)?,
            cache: CacheConfig::production(),
            email: EmailConfig::production(env),
            warnings,
        };

        tracing::debug!(
            hosts = settings.allowed_hosts.len(),
            ssl_redirect = settings.security.ssl_redirect,
            "production settings assembled"
        );
        Ok(settings)
    }

    fn development(env: &EnvVars, secret_key: SecretKey) -> SettingsResult<Self> {
        Ok(Self {
            environment: Environment::Development,
            debug: true,
            secret_key,
            application: ApplicationConfig::default(),
            security: SecurityConfig::development(),
            allowed_hosts: AllowedHosts::development(env),
            internal_ips: vec!["127.0.0.1".to_string(), "localhost".to_string()],
            database: DatabaseConfig::development(env)?,
            middleware: MiddlewareChain::base(),
            static_files: StaticFilesConfig::development(),
            media: MediaConfig::default(),
            cors: CorsConfig::development(),
            csrf: CsrfConfig::development(),
            session: SessionConfig::development(env)?,
            logging: LoggingConfig::development(),
            cache: CacheConfig::development(),
            email: EmailConfig::development(),
            warnings: Vec::new(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
