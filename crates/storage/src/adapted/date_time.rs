use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use loanbook_core::{DomainError, DomainResult};

/// Storage form of a UTC timestamp, kept as RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XmlAdaptedDateTime {
    value: String,
}

impl XmlAdaptedDateTime {
    pub const CONSTRAINTS: &'static str =
        "Times should be RFC 3339 timestamps, for example 2024-03-01T09:00:00Z";

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn to_model_type(&self) -> DomainResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.value)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| DomainError::illegal_value(Self::CONSTRAINTS))
    }
}

impl From<&DateTime<Utc>> for XmlAdaptedDateTime {
    fn from(source: &DateTime<Utc>) -> Self {
        Self::new(source.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
