//! Common error types used throughout cinescroll.
//!
//! Covers the failures that can happen before any request leaves the
//! process: malformed identifiers, unknown sort keys, and bad configuration
//! values.

/// Common error type for cinescroll.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An identifier could not be parsed.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// A sort key was not one of the supported values.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new InvalidId error.
    pub fn invalid_id<S: Into<String>>(msg: S) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create a new UnknownSortKey error.
    pub fn unknown_sort_key<S: Into<String>>(msg: S) -> Self {
        Self::UnknownSortKey(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
