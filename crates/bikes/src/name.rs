use core::borrow::Borrow;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use loanbook_core::{DomainError, DomainResult, ValidatedValue, ValueObject};

/// Bike name. Doubles as the bike's identity within a loan book.
///
/// Only alphanumeric characters and spaces, must not be blank and must not
/// start or end with a space. XML text is trimmed on load, so a name with
/// edge spaces could not be read back as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {}

impl ValidatedValue for Name {
    type Primitive = String;

    const CONSTRAINTS: &'static str = "Names should only contain alphanumeric characters and \
        spaces, should not be blank, and should not start or end with a space";

    fn is_valid(primitive: &String) -> bool {
        let edges_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
        edges_ok(primitive.chars().next())
            && edges_ok(primitive.chars().next_back())
            && primitive.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    fn from_primitive(primitive: String) -> DomainResult<Self> {
        Self::ensure_valid(&primitive)?;
        Ok(Self(primitive))
    }

    fn to_primitive(&self) -> String {
        self.0.clone()
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_primitive(s.to_string())
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_primitive(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}
