//! `loanbook-storage` — persisted form of the loan book.
//!
//! Converts between [`loanbook_loans::LoanBook`] and an XML document through
//! per-field adapter types. Reading and writing files is left to callers.

pub mod adapted;
pub mod error;
pub mod serializable;
pub mod xml;

pub use adapted::{
    XmlAdaptedBike, XmlAdaptedDateTime, XmlAdaptedLoan, XmlAdaptedLoanId, XmlAdaptedName,
};
pub use error::{StorageError, StorageResult};
pub use serializable::XmlSerializableLoanBook;
pub use xml::{from_xml_str, to_xml_string};
