use thiserror::Error;

/// A start time that could not be parsed as an ISO 8601 timestamp
#[derive(Error, Debug)]
#[error("Invalid start time '{input}'")]
pub struct FormatError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Backend client configuration that is absent or malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Missing backend configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid backend url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
