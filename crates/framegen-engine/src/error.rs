use thiserror::Error;

/// Result type for framegen-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a single UI interaction.
///
/// None of these end the session; the controller reports each one as a
/// notification before returning it.
#[derive(Debug, Error)]
pub enum Error {
    /// Form submitted before any framework type was chosen
    #[error("no framework type selected")]
    NoSelection,

    /// Export requested before anything was generated
    #[error("no framework to export")]
    NothingToExport,

    /// A type key that the loaded catalog does not contain
    #[error("unknown framework type: {0}")]
    UnknownType(String),

    /// Example card without a matching example or type record
    #[error("unknown example: {0}")]
    UnknownExample(String),

    /// Talking to the generation API failed
    #[error(transparent)]
    Api(#[from] framegen_client::Error),

    /// Export artifact could not be encoded
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<framegen_types::Error> for Error {
    fn from(err: framegen_types::Error) -> Self {
        match err {
            framegen_types::Error::UnknownType(key) => Error::UnknownType(key),
            other => Error::Api(framegen_client::Error::Decode(other)),
        }
    }
}
