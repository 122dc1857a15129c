use serde::{Deserialize, Serialize};

use loanbook_core::{DomainResult, ValidatedValue};
use loanbook_loans::LoanId;

/// Storage form of a [`LoanId`]: the bare integer, unvalidated until
/// [`XmlAdaptedLoanId::to_model_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XmlAdaptedLoanId {
    loan_id: i32,
}

impl XmlAdaptedLoanId {
    pub fn new(loan_id: i32) -> Self {
        Self { loan_id }
    }

    pub fn raw(&self) -> i32 {
        self.loan_id
    }

    /// Converts to the model's [`LoanId`].
    ///
    /// Fails with `IllegalValue(LoanId::CONSTRAINTS)` if the stored integer is
    /// out of range.
    pub fn to_model_type(&self) -> DomainResult<LoanId> {
        LoanId::from_primitive(self.loan_id)
    }
}

impl From<&LoanId> for XmlAdaptedLoanId {
    fn from(source: &LoanId) -> Self {
        Self::new(source.to_primitive())
    }
}

impl From<LoanId> for XmlAdaptedLoanId {
    fn from(source: LoanId) -> Self {
        Self::from(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanbook_core::DomainError;

    #[test]
    fn to_model_type_valid_loan_id_returns_loan_id() {
        let id = LoanId::from_primitive(12).unwrap();
        assert_eq!(XmlAdaptedLoanId::from(&id).to_model_type(), Ok(id));
    }

    #[test]
    fn to_model_type_invalid_loan_id_fails_with_constraints() {
        for raw in [-1, 1_000_000_000, i32::MIN] {
            assert_eq!(
                XmlAdaptedLoanId::new(raw).to_model_type(),
                Err(DomainError::IllegalValue(LoanId::CONSTRAINTS.to_string()))
            );
        }
    }

    #[test]
    fn default_adapter_holds_zero() {
        assert_eq!(XmlAdaptedLoanId::default().raw(), 0);
    }

    #[test]
    fn equality_follows_stored_primitive() {
        assert_eq!(XmlAdaptedLoanId::new(3), XmlAdaptedLoanId::new(3));
        assert_ne!(XmlAdaptedLoanId::new(3), XmlAdaptedLoanId::new(4));
        // Invalid primitives still compare by value.
        assert_eq!(XmlAdaptedLoanId::new(-1), XmlAdaptedLoanId::new(-1));
    }
}
