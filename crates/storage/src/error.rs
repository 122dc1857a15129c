//! Storage error model.

use loanbook_core::DomainError;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while converting between a stored document and the model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The document is not well-formed or does not have the expected shape.
    #[error("malformed loan book document: {0}")]
    Format(String),

    /// The document is well-formed but holds a value the model rejects.
    #[error("illegal value in stored data: {0}")]
    IllegalValue(#[from] DomainError),
}

impl StorageError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}
