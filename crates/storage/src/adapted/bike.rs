use serde::{Deserialize, Serialize};

use loanbook_bikes::{Bike, BikeStatus};
use loanbook_core::DomainResult;

use super::{missing_field, name::XmlAdaptedName};

/// Storage form of a [`Bike`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XmlAdaptedBike {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<XmlAdaptedName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl XmlAdaptedBike {
    pub fn new(name: Option<XmlAdaptedName>, status: Option<String>) -> Self {
        Self { name, status }
    }

    pub fn to_model_type(&self) -> DomainResult<Bike> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| missing_field("Bike", "Name"))?
            .to_model_type()?;
        let status = self
            .status
            .as_deref()
            .ok_or_else(|| missing_field("Bike", "Status"))?
            .parse::<BikeStatus>()?;
        Ok(Bike::with_status(name, status))
    }
}

impl From<&Bike> for XmlAdaptedBike {
    fn from(source: &Bike) -> Self {
        Self::new(
            Some(XmlAdaptedName::from(source.name())),
            Some(source.status().to_string()),
        )
    }
}
