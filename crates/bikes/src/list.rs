use loanbook_core::UniqueList;

use crate::bike::Bike;

/// Bikes keyed by name, in insertion order.
pub type UniqueBikeList = UniqueList<Bike>;
