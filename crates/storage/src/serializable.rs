//! Document root for a stored loan book.

use serde::{Deserialize, Serialize};

use loanbook_core::{DomainError, DomainResult};
use loanbook_loans::{LoanBook, LoanIdManager};

use crate::adapted::{XmlAdaptedBike, XmlAdaptedLoan, XmlAdaptedLoanId};

/// Serializable form of a whole [`LoanBook`].
///
/// ```xml
/// <loanbook>
///   <bikes><name>B001</name><status>Available</status></bikes>
///   <loans><loanId>0</loanId><bike>B001</bike>...</loans>
///   <lastLoanId>0</lastLoanId>
/// </loanbook>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename = "loanbook", rename_all = "camelCase")]
pub struct XmlSerializableLoanBook {
    #[serde(default)]
    bikes: Vec<XmlAdaptedBike>,
    #[serde(default)]
    loans: Vec<XmlAdaptedLoan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_loan_id: Option<XmlAdaptedLoanId>,
}

impl XmlSerializableLoanBook {
    pub const MESSAGE_DUPLICATE_BIKE: &'static str = "Bikes list contains duplicate bike(s).";
    pub const MESSAGE_DUPLICATE_LOAN: &'static str = "Loans list contains duplicate loan(s).";

    pub fn new(
        bikes: Vec<XmlAdaptedBike>,
        loans: Vec<XmlAdaptedLoan>,
        last_loan_id: Option<XmlAdaptedLoanId>,
    ) -> Self {
        Self {
            bikes,
            loans,
            last_loan_id,
        }
    }

    pub fn bike_count(&self) -> usize {
        self.bikes.len()
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    /// Rebuilds the model, validating every stored value.
    ///
    /// Duplicates inside the document are reported as illegal values, since
    /// they mean the stored data is corrupt rather than that a caller made a
    /// bad request. The id counter resumes after the highest of the stored
    /// counter and every stored loan id.
    pub fn to_model_type(&self) -> DomainResult<LoanBook> {
        let mut book = LoanBook::new();

        for adapted in &self.bikes {
            let bike = adapted.to_model_type()?;
            if book.has_bike(&bike) {
                return Err(DomainError::illegal_value(Self::MESSAGE_DUPLICATE_BIKE));
            }
            book.add_bike(bike)?;
        }

        for adapted in &self.loans {
            let loan = adapted.to_model_type()?;
            if book.has_loan(&loan) {
                return Err(DomainError::illegal_value(Self::MESSAGE_DUPLICATE_LOAN));
            }
            book.add_loan(loan)?;
        }

        let stored = self
            .last_loan_id
            .as_ref()
            .map(XmlAdaptedLoanId::to_model_type)
            .transpose()?;
        let highest_loan = self.loans.iter().filter_map(XmlAdaptedLoan::valid_loan_id).max();
        if let Some(last) = stored.max(highest_loan) {
            book.set_loan_ids(LoanIdManager::resume_after(last));
        }

        Ok(book)
    }
}

impl From<&LoanBook> for XmlSerializableLoanBook {
    fn from(source: &LoanBook) -> Self {
        Self::new(
            source.bikes().iter().map(XmlAdaptedBike::from).collect(),
            source.loans().iter().map(XmlAdaptedLoan::from).collect(),
            source.loan_ids().last_used().map(XmlAdaptedLoanId::from),
        )
    }
}
