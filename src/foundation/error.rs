/// Convenience result type used across spotcheck.
pub type SpotCheckResult<T> = Result<T, SpotCheckError>;

/// Error taxonomy for a single spot-check entry (and for batch setup).
///
/// Every variant is entry-local: the batch runner logs it, counts the entry as failed and moves
/// on to the next one.
#[derive(thiserror::Error, Debug)]
pub enum SpotCheckError {
    /// No category could be derived from a top-level video key.
    #[error("unclassifiable key: could not determine category for '{key}'")]
    UnclassifiableKey {
        /// The offending top-level key.
        key: String,
    },

    /// An annotation record did not contain any frame index.
    #[error("empty record: no frames in annotation record")]
    EmptyRecord,

    /// Remote retrieval or frame extraction failed.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The extracted artifact could not be read as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid configuration or malformed annotation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when parsing the annotation document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotCheckError {
    /// Build a [`SpotCheckError::UnclassifiableKey`] value.
    pub fn unclassifiable(key: impl Into<String>) -> Self {
        Self::UnclassifiableKey { key: key.into() }
    }

    /// Build a [`SpotCheckError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`SpotCheckError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SpotCheckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotCheckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Short, stable name of the error kind, used in run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnclassifiableKey { .. } => "UnclassifiableKey",
            Self::EmptyRecord => "EmptyRecord",
            Self::Fetch(_) => "FetchError",
            Self::Decode(_) => "DecodeError",
            Self::Validation(_) => "Validation",
            Self::Serde(_) => "Serde",
            Self::Other(_) => "Unhandled",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
