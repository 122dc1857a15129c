use serde::{Deserialize, Serialize};

use loanbook_core::{DomainResult, ValidatedValue};
use loanbook_loans::{Loan, LoanId, LoanStatus};

use super::{
    date_time::XmlAdaptedDateTime, loan_id::XmlAdaptedLoanId, missing_field, name::XmlAdaptedName,
};

/// Storage form of a [`Loan`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlAdaptedLoan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    loan_id: Option<XmlAdaptedLoanId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bike: Option<XmlAdaptedName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time: Option<XmlAdaptedDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<XmlAdaptedDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl XmlAdaptedLoan {
    pub fn new(
        loan_id: Option<XmlAdaptedLoanId>,
        bike: Option<XmlAdaptedName>,
        start_time: Option<XmlAdaptedDateTime>,
        end_time: Option<XmlAdaptedDateTime>,
        status: Option<String>,
    ) -> Self {
        Self {
            loan_id,
            bike,
            start_time,
            end_time,
            status,
        }
    }

    /// An absent end time is legal (the loan is still running); every other
    /// field is required.
    pub fn to_model_type(&self) -> DomainResult<Loan> {
        let id = self
            .loan_id
            .as_ref()
            .ok_or_else(|| missing_field("Loan", "LoanId"))?
            .to_model_type()?;
        let bike = self
            .bike
            .as_ref()
            .ok_or_else(|| missing_field("Loan", "Bike"))?
            .to_model_type()?;
        let start_time = self
            .start_time
            .as_ref()
            .ok_or_else(|| missing_field("Loan", "StartTime"))?
            .to_model_type()?;
        let end_time = self
            .end_time
            .as_ref()
            .map(XmlAdaptedDateTime::to_model_type)
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .ok_or_else(|| missing_field("Loan", "Status"))?
            .parse::<LoanStatus>()?;

        Loan::from_parts(id, bike, start_time, end_time, status)
    }
}

impl From<&Loan> for XmlAdaptedLoan {
    fn from(source: &Loan) -> Self {
        Self::new(
            Some(XmlAdaptedLoanId::from(source.id())),
            Some(XmlAdaptedName::from(source.bike())),
            Some(XmlAdaptedDateTime::from(&source.start_time())),
            source.end_time().as_ref().map(XmlAdaptedDateTime::from),
            Some(source.status().to_string()),
        )
    }
}

impl XmlAdaptedLoan {
    /// Stored id, if it is present and valid. Used to keep the id counter ahead
    /// of every stored loan.
    pub(crate) fn valid_loan_id(&self) -> Option<LoanId> {
        self.loan_id
            .and_then(|raw| LoanId::from_primitive(raw.raw()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use loanbook_core::DomainError;

    fn returned_loan() -> Loan {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 12, 15, 0).unwrap();
        Loan::new(LoanId::from_primitive(5).unwrap(), "B001".parse().unwrap(), start)
            .returned_at(end)
            .unwrap()
    }

    fn adapted(loan: &Loan) -> XmlAdaptedLoan {
        XmlAdaptedLoan::from(loan)
    }

    #[test]
    fn to_model_type_valid_details_returns_loan() {
        let loan = returned_loan();
        assert_eq!(adapted(&loan).to_model_type(), Ok(loan));
    }

    #[test]
    fn to_model_type_ongoing_loan_without_end_time() {
        let returned = returned_loan();
        let ongoing = Loan::new(returned.id(), returned.bike().clone(), returned.start_time());
        assert_eq!(adapted(&ongoing).to_model_type(), Ok(ongoing));
    }

    #[test]
    fn to_model_type_invalid_loan_id_fails() {
        let mut xml = adapted(&returned_loan());
        xml.loan_id = Some(XmlAdaptedLoanId::new(-3));
        assert_eq!(
            xml.to_model_type(),
            Err(DomainError::IllegalValue(LoanId::CONSTRAINTS.to_string()))
        );
        assert_eq!(xml.valid_loan_id(), None);
    }

    #[test]
    fn to_model_type_missing_fields_fail() {
        let mut xml = adapted(&returned_loan());
        xml.start_time = None;
        assert_eq!(
            xml.to_model_type(),
            Err(DomainError::IllegalValue(
                "Loan's StartTime field is missing!".to_string()
            ))
        );

        let mut xml = adapted(&returned_loan());
        xml.loan_id = None;
        assert_eq!(
            xml.to_model_type(),
            Err(DomainError::IllegalValue(
                "Loan's LoanId field is missing!".to_string()
            ))
        );
    }

    #[test]
    fn to_model_type_end_before_start_fails() {
        let mut xml = adapted(&returned_loan());
        xml.end_time = Some(XmlAdaptedDateTime::new("2024-03-01T08:00:00Z"));
        assert_eq!(
            xml.to_model_type(),
            Err(DomainError::IllegalValue(Loan::TIME_CONSTRAINTS.to_string()))
        );
    }

    #[test]
    fn to_model_type_unknown_status_fails() {
        let mut xml = adapted(&returned_loan());
        xml.status = Some("Lost".to_string());
        assert_eq!(
            xml.to_model_type(),
            Err(DomainError::IllegalValue(LoanStatus::CONSTRAINTS.to_string()))
        );
    }
}
