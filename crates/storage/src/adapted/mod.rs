//! Adapters between storage primitives and validated model values.
//!
//! Each adapter holds raw, unvalidated data and has a `to_model_type` that is
//! the only way back into the model. Construction from a model value copies
//! its primitive out.

pub mod bike;
pub mod date_time;
pub mod loan;
pub mod loan_id;
pub mod name;

pub use bike::XmlAdaptedBike;
pub use date_time::XmlAdaptedDateTime;
pub use loan::XmlAdaptedLoan;
pub use loan_id::XmlAdaptedLoanId;
pub use name::XmlAdaptedName;

use loanbook_core::DomainError;

pub(crate) fn missing_field(owner: &str, field: &str) -> DomainError {
    DomainError::illegal_value(format!("{owner}'s {field} field is missing!"))
}
