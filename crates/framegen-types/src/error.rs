use thiserror::Error;

/// Result type for framegen-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding API payloads
#[derive(Debug, Error)]
pub enum Error {
    /// Payload was not valid JSON or did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Framework references a type key that the type catalog does not contain
    #[error("Unknown framework type: {0}")]
    UnknownType(String),
}
