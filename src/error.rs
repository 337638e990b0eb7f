use std::error::Error as StdError;

use thiserror::Error;

/// numsplit's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// numsplit's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// The transcription was rejected before any analysis ran.
    #[error("invalid transcription data: {0}")]
    Validation(#[from] ValidationError),

    /// Neither structural nor fallback detection accepted a single number.
    #[error("no sequential numbers found in transcription")]
    NoNumbersFound,

    #[error("invalid options: {0}")]
    InvalidOpts(String),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

/// Why a transcription failed input validation.
///
/// Per-element variants carry the index of the first offending word.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("must be a non-empty array of words")]
    Empty,

    #[error("expected an array of words: {0}")]
    NotASequence(String),

    #[error("missing text at index {index}")]
    MissingText { index: usize },

    #[error("missing or malformed timestamp at index {index}")]
    MalformedTimestamp { index: usize },

    #[error("non-finite timestamp at index {index}")]
    NonFiniteTimestamp { index: usize },

    #[error("invalid timestamp at index {index}: start {start} >= end {end}")]
    InvertedTimestamp { index: usize, start: f64, end: f64 },
}

impl Error {
    pub(crate) fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub(crate) fn invalid_opts(message: impl Into<String>) -> Self {
        Self::InvalidOpts(message.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}
