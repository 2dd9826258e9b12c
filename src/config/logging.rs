//! Logging layout: formatters, handlers and per-logger thresholds.
//!
//! The shape is fixed per profile. `utils::logging` turns it into a
//! `tracing-subscriber` filter and formatter.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::level_filters::LevelFilter;

use super::env::EnvVars;
use crate::utils::{SettingsError, SettingsResult};

pub const VERBOSE_FORMAT: &str = "{levelname} {asctime} {module} {process:d} {thread:d} {message}";
pub const SIMPLE_FORMAT: &str = "{levelname} {message}";

/// Logger level names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Notset,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Notset => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Closest `tracing` threshold. NOTSET lets everything through.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Notset => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOTSET" => Ok(LogLevel::Notset),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(SettingsError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formatter {
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    /// Writes to the process's standard streams
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handler {
    pub kind: HandlerKind,
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    /// Handlers events are sent to
    pub handlers: Vec<String>,
    /// Minimum level recorded
    pub level: LogLevel,
    /// Pass events on to the root logger as well
    pub propagate: bool,
}

impl LoggerConfig {
    fn console(level: LogLevel) -> Self {
        Self {
            handlers: vec!["console".to_string()],
            level,
            propagate: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
    /// Silence loggers configured before this one is applied
    pub disable_existing_loggers: bool,
    /// Named output formats
    pub formatters: BTreeMap<String, Formatter>,
    /// Named output destinations
    pub handlers: BTreeMap<String, Handler>,
    /// Fallback for loggers with no entry
    pub root: LoggerConfig,
    /// Per-module thresholds
    pub loggers: BTreeMap<String, LoggerConfig>,
}

impl LoggingConfig {
    fn build(
        formatters: &[(&str, &str)],
        console_formatter: &str,
        root: LogLevel,
        loggers: &[(&str, LogLevel)],
    ) -> Self {
        Self {
            disable_existing_loggers: false,
            formatters: formatters
                .iter()
                .map(|(name, format)| {
                    (name.to_string(), Formatter { format: format.to_string() })
                })
                .collect(),
            handlers: BTreeMap::from([(
                "console".to_string(),
                Handler {
                    kind: HandlerKind::Console,
                    formatter: console_formatter.to_string(),
                },
            )]),
            root: LoggerConfig::console(root),
            loggers: loggers
                .iter()
                .map(|(name, level)| (name.to_string(), LoggerConfig::console(*level)))
                .collect(),
        }
    }

    /// `DJANGO_LOG_LEVEL` governs the framework logger only
    pub(crate) fn production(env: &EnvVars) -> SettingsResult<Self> {
        let framework_level = match env.django_log_level.as_deref() {
            Some(level) => level.parse()?,
            None => LogLevel::Info,
        };

        Ok(Self::build(
            &[("verbose", VERBOSE_FORMAT)],
            "verbose",
            LogLevel::Info,
            &[("django", framework_level), ("core", LogLevel::Info)],
        ))
    }

    pub(crate) fn development() -> Self {
        Self::build(
            &[("verbose", VERBOSE_FORMAT), ("simple", SIMPLE_FORMAT)],
            "simple",
            LogLevel::Debug,
            &[("django", LogLevel::Info), ("core", LogLevel::Debug)],
        )
    }

    /// Formatter used by the console handler
    pub fn console_formatter(&self) -> Option<&str> {
        self.handlers.get("console").map(|h| h.formatter.as_str())
    }

    /// Render as an `EnvFilter` directive string, e.g. `info,core=info,django=warn`
    pub fn filter_directives(&self) -> String {
        let mut directives = vec![self.root.level.level_filter().to_string().to_lowercase()];
        directives.extend(self.loggers.iter().map(|(name, logger)| {
            format!(
                "{}={}",
                name,
                logger.level.level_filter().to_string().to_lowercase()
            )
        }));
        directives.join(",")
    }
}
