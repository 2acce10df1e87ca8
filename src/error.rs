//! Error types for the credbot gateway

use thiserror::Error;

/// Result type alias for credbot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the credbot gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Request validation error
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Speech-to-text error
    #[error("STT error: {0}")]
    Stt(String),

    /// Chat completion error
    #[error("completion error: {0}")]
    Completion(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
