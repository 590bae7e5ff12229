use thiserror::Error;

/// Errors raised while building or configuring a logger.
///
/// Logging calls themselves never fail; every variant here surfaces at
/// construction time.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid redaction pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Tracing initialization failed: {0}")]
    Subscriber(String),
}

pub type Result<T> = std::result::Result<T, LoggerError>;
