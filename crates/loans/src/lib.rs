//! Loans and the loan book that ties bikes and loans together.
//!
//! Scheduling rules (pricing, reminders, who may borrow what) are not modelled
//! here; this crate only keeps the records consistent.

pub mod book;
pub mod list;
pub mod loan;
pub mod loan_id;
pub mod manager;

pub use book::LoanBook;
pub use list::UniqueLoanList;
pub use loan::{Loan, LoanStatus};
pub use loan_id::LoanId;
pub use manager::LoanIdManager;
