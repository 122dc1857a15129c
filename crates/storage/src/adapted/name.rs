use serde::{Deserialize, Serialize};

use loanbook_bikes::Name;
use loanbook_core::{DomainResult, ValidatedValue};

/// Storage form of a bike [`Name`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XmlAdaptedName {
    name: String,
}

impl XmlAdaptedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn to_model_type(&self) -> DomainResult<Name> {
        Name::from_primitive(self.name.clone())
    }
}

impl From<&Name> for XmlAdaptedName {
    fn from(source: &Name) -> Self {
        Self::new(source.to_primitive())
    }
}
