//! Error types for store construction and typed access.

use thiserror::Error;

/// Store errors.
///
/// Plain keyed writes never fail. Errors come from typed access to a
/// snapshot and from constructing a layer over a store whose live state
/// does not have the shape the layer expects.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// A typed read asked for a key the state does not hold.
    #[error("missing key: {0}")]
    MissingKey(String),

    /// A key holds a value of the wrong shape.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The offending key.
        key: String,
        /// What was wrong with it.
        message: String,
    },

    /// A typed state or option set could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Build an [`StoreError::InvalidValue`] for `key`.
    pub fn invalid(key: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.to_string(),
        }
    }
}
