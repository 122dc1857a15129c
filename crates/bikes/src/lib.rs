//! Bikes: the lendable records of a loan book.

pub mod bike;
pub mod list;
pub mod name;

pub use bike::{Bike, BikeStatus};
pub use list::UniqueBikeList;
pub use name::Name;
