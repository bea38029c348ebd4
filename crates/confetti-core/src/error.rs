//! Error types for the confetti crates

use thiserror::Error;

/// The main error type for confetti operations
#[derive(Debug, Error)]
pub enum ConfettiError {
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("Scheduler error: {0}")]
    Scheduler(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for confetti operations
pub type Result<T> = std::result::Result<T, ConfettiError>;

impl From<toml::de::Error> for ConfettiError {
    fn from(err: toml::de::Error) -> Self {
        ConfettiError::ConfigParse(err.to_string())
    }
}
