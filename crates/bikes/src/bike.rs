use core::str::FromStr;

use serde::{Deserialize, Serialize};

use loanbook_core::{DomainError, Entity};

use crate::name::Name;

/// Whether a bike is free to lend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BikeStatus {
    #[default]
    Available,
    Loaned,
}

impl BikeStatus {
    pub const CONSTRAINTS: &'static str = "Bike status should be either Available or Loaned";

    pub fn as_str(self) -> &'static str {
        match self {
            BikeStatus::Available => "Available",
            BikeStatus::Loaned => "Loaned",
        }
    }
}

impl core::fmt::Display for BikeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BikeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(BikeStatus::Available),
            "Loaned" => Ok(BikeStatus::Loaned),
            _ => Err(DomainError::illegal_value(Self::CONSTRAINTS)),
        }
    }
}

/// A bike in the loan book.
///
/// Identity is the name alone; the status is ordinary mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    name: Name,
    status: BikeStatus,
}

impl Bike {
    /// A new bike, available for loan.
    pub fn new(name: Name) -> Self {
        Self::with_status(name, BikeStatus::Available)
    }

    pub fn with_status(name: Name, status: BikeStatus) -> Self {
        Self { name, status }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn status(&self) -> BikeStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == BikeStatus::Available
    }

    /// Copy of this bike under a different name.
    pub fn renamed(&self, name: Name) -> Self {
        Self::with_status(name, self.status)
    }

    /// Copy of this bike with a different status.
    pub fn marked(&self, status: BikeStatus) -> Self {
        Self::with_status(self.name.clone(), status)
    }
}

impl Entity for Bike {
    type Identity = Name;
    const KIND: &'static str = "bike";

    fn identity(&self) -> &Name {
        &self.name
    }
}

impl core::fmt::Display for Bike {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Status: {}", self.name, self.status)
    }
}
