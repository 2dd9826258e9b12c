use thiserror::Error;

/// Errors raised while loading or consuming deployment settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Environment variables could not be collected
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A required environment variable is unset or empty
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    /// A variable the loader reads holds bytes that are not valid UTF-8
    #[error("{0} environment variable is not valid unicode")]
    NonUnicode(&'static str),

    /// An integer-valued variable did not parse
    #[error("invalid integer for {var}: {value:?}")]
    InvalidInteger { var: &'static str, value: String },

    /// A log level name is not one the logging layer knows
    #[error("unknown log level: {0:?}")]
    InvalidLogLevel(String),

    /// No database URL was configured
    #[error("database URL is not configured")]
    DatabaseUrlMissing,

    /// The database URL could not be parsed
    #[error("invalid database URL: {0}")]
    DatabaseUrl(#[from] url::ParseError),

    /// The database URL uses a scheme with no known engine
    #[error("unsupported database scheme: {0}")]
    UnsupportedScheme(String),

    /// A component of the database URL is not valid UTF-8 after decoding
    #[error("invalid percent-encoding in database URL: {0}")]
    Encoding(String),

    /// A redirect exemption pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The global subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// A setting could not be turned into an HTTP header, method or origin
    #[error("invalid HTTP value {value:?}: {reason}")]
    InvalidHeader { value: String, reason: String },
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl SettingsError {
    pub(crate) fn header(value: &str, reason: impl ToString) -> Self {
        SettingsError::InvalidHeader {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
