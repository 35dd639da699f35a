//! Error types for petfolio.

use thiserror::Error;

/// Result type alias using petfolio's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for petfolio operations.
///
/// The backend is the source of truth for everything; most failures here are
/// transport failures whose message names the operation that failed ("Failed
/// to fetch pets", "Pet not found"). Not-found is deliberately a `Request`
/// with a specific message rather than a distinct variant, matching how the
/// UI surfaces it.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed (non-2xx status or transport error)
    #[error("Request error: {0}")]
    Request(String),

    /// A backend record carries no usable identity (`id` or `_id`)
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
