use thiserror::Error;

/// Result type for framegen-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the generation API
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status} ({path})")]
    Status { path: String, status: u16 },

    /// The body could not be decoded into the expected payload
    #[error(transparent)]
    Decode(#[from] framegen_types::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn transport(
        path: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Transport {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(framegen_types::Error::Decode(err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
