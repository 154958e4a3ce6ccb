//! Error types for index construction and search

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("No fragments to index")]
    EmptyInput,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup that a correctly built index always satisfies came back empty.
    #[error("Index invariant violated: {0}")]
    InternalInvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        IndexError::InvalidArgument(msg.into())
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        IndexError::InternalInvariantViolation(msg.into())
    }
}
