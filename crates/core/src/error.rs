//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic data-integrity failures (uniqueness,
/// lookups, validation). Storage and IO concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The mutation would leave two identity-equal entries in a collection.
    #[error("operation would result in duplicate {kind} entries")]
    Duplicate { kind: &'static str },

    /// The referenced entry is not in the collection.
    #[error("{kind} not found")]
    NotFound { kind: &'static str },

    /// A primitive value failed validation. Carries the type's constraint message.
    #[error("{0}")]
    IllegalValue(String),
}

impl DomainError {
    pub fn duplicate(kind: &'static str) -> Self {
        Self::Duplicate { kind }
    }

    pub fn not_found(kind: &'static str) -> Self {
        Self::NotFound { kind }
    }

    pub fn illegal_value(msg: impl Into<String>) -> Self {
        Self::IllegalValue(msg.into())
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
