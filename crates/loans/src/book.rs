//! The loan book: every bike and loan plus the loan id counter.

use loanbook_bikes::{Bike, UniqueBikeList};
use loanbook_core::{DomainResult, UniqueListView};

use crate::list::UniqueLoanList;
use crate::loan::Loan;
use crate::loan_id::LoanId;
use crate::manager::LoanIdManager;

/// Root of the persisted model.
///
/// Thin wrapper: all uniqueness rules live in the underlying lists; this type
/// only routes calls and keeps the three parts together for storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoanBook {
    bikes: UniqueBikeList,
    loans: UniqueLoanList,
    loan_ids: LoanIdManager,
}

impl LoanBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace this book's contents with a copy of `other`.
    pub fn reset_data(&mut self, other: &LoanBook) {
        self.bikes.set_all_from(&other.bikes);
        self.loans.set_all_from(&other.loans);
        self.loan_ids = other.loan_ids;
    }

    pub fn has_bike(&self, bike: &Bike) -> bool {
        self.bikes.contains(bike)
    }

    pub fn add_bike(&mut self, bike: Bike) -> DomainResult<()> {
        self.bikes.add(bike)
    }

    pub fn set_bike(&mut self, target: &Bike, edited: Bike) -> DomainResult<()> {
        self.bikes.set(target, edited)
    }

    pub fn remove_bike(&mut self, bike: &Bike) -> DomainResult<Bike> {
        self.bikes.remove(bike)
    }

    pub fn get_bike(&self, name: &str) -> Option<&Bike> {
        self.bikes.get_by_identity(name)
    }

    pub fn set_bikes(&mut self, bikes: Vec<Bike>) -> DomainResult<()> {
        self.bikes.set_all(bikes)
    }

    pub fn bikes(&self) -> UniqueListView<'_, Bike> {
        self.bikes.as_view()
    }

    pub fn has_loan(&self, loan: &Loan) -> bool {
        self.loans.contains(loan)
    }

    pub fn add_loan(&mut self, loan: Loan) -> DomainResult<()> {
        self.loans.add(loan)
    }

    pub fn set_loan(&mut self, target: &Loan, edited: Loan) -> DomainResult<()> {
        self.loans.set(target, edited)
    }

    pub fn remove_loan(&mut self, loan: &Loan) -> DomainResult<Loan> {
        self.loans.remove(loan)
    }

    pub fn get_loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get_by_identity(&id)
    }

    pub fn set_loans(&mut self, loans: Vec<Loan>) -> DomainResult<()> {
        self.loans.set_all(loans)
    }

    pub fn loans(&self) -> UniqueListView<'_, Loan> {
        self.loans.as_view()
    }

    pub fn loan_ids(&self) -> LoanIdManager {
        self.loan_ids
    }

    pub fn set_loan_ids(&mut self, loan_ids: LoanIdManager) {
        self.loan_ids = loan_ids;
    }

    /// Issues a fresh loan id, or `None` once ids are exhausted.
    pub fn next_loan_id(&mut self) -> Option<LoanId> {
        self.loan_ids.next_available_id()
    }
}
