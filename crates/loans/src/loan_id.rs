use core::str::FromStr;

use serde::{Deserialize, Serialize};

use loanbook_core::{DomainError, DomainResult, ValidatedValue, ValueObject};

/// Loan identifier: a non-negative integer below one billion.
///
/// The primitive is signed so that negative values read from storage can be
/// represented long enough to be rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct LoanId(i32);

impl LoanId {
    pub const MIN: LoanId = LoanId(0);
    pub const MAX: LoanId = LoanId(999_999_999);

    pub fn value(self) -> i32 {
        self.0
    }

    /// The id after this one, or `None` at [`LoanId::MAX`].
    pub fn next(self) -> Option<LoanId> {
        if self == Self::MAX {
            None
        } else {
            Some(LoanId(self.0 + 1))
        }
    }
}

impl ValueObject for LoanId {}

impl ValidatedValue for LoanId {
    type Primitive = i32;

    const CONSTRAINTS: &'static str =
        "LoanId should be a non-negative integer less than 1000000000";

    fn is_valid(primitive: &i32) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(primitive)
    }

    fn from_primitive(primitive: i32) -> DomainResult<Self> {
        Self::ensure_valid(&primitive)?;
        Ok(Self(primitive))
    }

    fn to_primitive(&self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for LoanId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for LoanId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::illegal_value(Self::CONSTRAINTS))?;
        Self::from_primitive(raw)
    }
}

impl TryFrom<i32> for LoanId {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_primitive(value)
    }
}

impl From<LoanId> for i32 {
    fn from(value: LoanId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(LoanId::is_valid(&0));
        assert!(LoanId::is_valid(&999_999_999));
        assert!(!LoanId::is_valid(&-1));
        assert!(!LoanId::is_valid(&1_000_000_000));
        assert!(!LoanId::is_valid(&i32::MIN));
    }

    #[test]
    fn parse_rejects_non_numeric_with_constraint_message() {
        let expected = Err(DomainError::IllegalValue(LoanId::CONSTRAINTS.to_string()));
        assert_eq!("abc".parse::<LoanId>(), expected);
        assert_eq!("-5".parse::<LoanId>(), expected);
        assert_eq!(" 42 ".parse::<LoanId>().map(LoanId::value), Ok(42));
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(LoanId::MIN.next(), Some(LoanId(1)));
        assert_eq!(LoanId::MAX.next(), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction succeeds exactly for in-range primitives and preserves them.
            #[test]
            fn from_primitive_matches_predicate(raw in any::<i32>()) {
                match LoanId::from_primitive(raw) {
                    Ok(id) => {
                        prop_assert!(LoanId::is_valid(&raw));
                        prop_assert_eq!(id.to_primitive(), raw);
                    }
                    Err(err) => {
                        prop_assert!(!LoanId::is_valid(&raw));
                        prop_assert_eq!(err, DomainError::IllegalValue(LoanId::CONSTRAINTS.to_string()));
                    }
                }
            }
        }
    }
}
