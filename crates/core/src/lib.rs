//! `loanbook-core` — record-layer building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO): the
//! error model, entity and value-object contracts, and the identity-unique
//! collection every record list is built on.

pub mod entity;
pub mod error;
pub mod unique_list;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use unique_list::{UniqueList, UniqueListView};
pub use value_object::{ValidatedValue, ValueObject};
