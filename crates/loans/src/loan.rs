use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loanbook_bikes::Name;
use loanbook_core::{DomainError, DomainResult, Entity};

use crate::loan_id::LoanId;

/// Loan status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    Ongoing,
    Returned,
    Deleted,
}

impl LoanStatus {
    pub const CONSTRAINTS: &'static str =
        "Loan status should be one of Ongoing, Returned or Deleted";

    pub fn as_str(self) -> &'static str {
        match self {
            LoanStatus::Ongoing => "Ongoing",
            LoanStatus::Returned => "Returned",
            LoanStatus::Deleted => "Deleted",
        }
    }
}

impl core::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ongoing" => Ok(LoanStatus::Ongoing),
            "Returned" => Ok(LoanStatus::Returned),
            "Deleted" => Ok(LoanStatus::Deleted),
            _ => Err(DomainError::illegal_value(Self::CONSTRAINTS)),
        }
    }
}

/// A loan of one bike.
///
/// Identity is the loan id. The bike is referenced by name only. Not
/// deserializable directly: stored loans come back through
/// [`Loan::from_parts`] so the time ordering is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loan {
    id: LoanId,
    bike: Name,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    status: LoanStatus,
}

impl Loan {
    pub const TIME_CONSTRAINTS: &'static str = "End time cannot be earlier than start time";

    /// An ongoing loan starting at `start_time`.
    pub fn new(id: LoanId, bike: Name, start_time: DateTime<Utc>) -> Self {
        Self {
            id,
            bike,
            start_time,
            end_time: None,
            status: LoanStatus::Ongoing,
        }
    }

    /// Rebuild a loan from stored fields, checking the time ordering.
    pub fn from_parts(
        id: LoanId,
        bike: Name,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        status: LoanStatus,
    ) -> DomainResult<Self> {
        ensure_ordered(start_time, end_time)?;
        Ok(Self {
            id,
            bike,
            start_time,
            end_time,
            status,
        })
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn bike(&self) -> &Name {
        &self.bike
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn is_ongoing(&self) -> bool {
        self.status == LoanStatus::Ongoing
    }

    /// Copy of this loan closed at `end_time`.
    pub fn returned_at(&self, end_time: DateTime<Utc>) -> DomainResult<Self> {
        ensure_ordered(self.start_time, Some(end_time))?;
        Ok(Self {
            end_time: Some(end_time),
            status: LoanStatus::Returned,
            ..self.clone()
        })
    }

    /// Copy of this loan with a different status; times are kept.
    pub fn marked(&self, status: LoanStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

fn ensure_ordered(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> DomainResult<()> {
    match end {
        Some(end) if end < start => Err(DomainError::illegal_value(Loan::TIME_CONSTRAINTS)),
        _ => Ok(()),
    }
}

impl Entity for Loan {
    type Identity = LoanId;
    const KIND: &'static str = "loan";

    fn identity(&self) -> &LoanId {
        &self.id
    }
}

impl core::fmt::Display for Loan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] Bike: {} Start: {}",
            self.id,
            self.bike,
            self.start_time.to_rfc3339()
        )?;
        if let Some(end) = self.end_time {
            write!(f, " End: {}", end.to_rfc3339())?;
        }
        write!(f, " Status: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use loanbook_core::ValidatedValue;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    fn loan(id: i32) -> Loan {
        Loan::new(
            LoanId::from_primitive(id).unwrap(),
            "B001".parse().unwrap(),
            at(9),
        )
    }

    #[test]
    fn identity_is_the_loan_id() {
        let l = loan(1);
        assert!(l.is_same(&l.marked(LoanStatus::Deleted)));
        assert!(!l.is_same(&loan(2)));
        assert_ne!(l, l.marked(LoanStatus::Deleted));
    }

    #[test]
    fn returned_at_closes_loan() {
        let closed = loan(1).returned_at(at(11)).unwrap();
        assert_eq!(closed.status(), LoanStatus::Returned);
        assert_eq!(closed.end_time(), Some(at(11)));
        assert_eq!(closed.start_time(), at(9));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let expected = Err(DomainError::IllegalValue(Loan::TIME_CONSTRAINTS.to_string()));
        assert_eq!(loan(1).returned_at(at(8)), expected);
        assert_eq!(
            Loan::from_parts(
                LoanId::MIN,
                "B001".parse().unwrap(),
                at(9),
                Some(at(8)),
                LoanStatus::Returned,
            ),
            expected
        );
    }

    #[test]
    fn displays_id_bike_times_and_status() {
        assert_eq!(
            loan(7).to_string(),
            "[7] Bike: B001 Start: 2024-03-01T09:00:00+00:00 Status: Ongoing"
        );
        assert_eq!(
            loan(7).returned_at(at(10)).unwrap().to_string(),
            "[7] Bike: B001 Start: 2024-03-01T09:00:00+00:00 End: 2024-03-01T10:00:00+00:00 Status: Returned"
        );
    }
}
