use loanbook_core::UniqueList;

use crate::loan::Loan;

/// Loans keyed by loan id, in insertion order.
pub type UniqueLoanList = UniqueList<Loan>;
