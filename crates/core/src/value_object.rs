//! Value object traits: equality by value, validation at the boundary.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. The values in this workspace also wrap a primitive that
//! must satisfy a predicate before the value may exist in memory.

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A value object backed by a single validated primitive.
///
/// Validation happens exactly once, in [`ValidatedValue::from_primitive`]. Once
/// a value exists it is valid, so nothing downstream re-checks it.
///
/// ```ignore
/// let id = LoanId::from_primitive(42)?;
/// assert_eq!(id.to_primitive(), 42);
/// assert!(LoanId::from_primitive(-1).is_err());
/// ```
pub trait ValidatedValue: ValueObject + Sized {
    /// Storage-friendly representation (integer, string).
    type Primitive;

    /// Human-readable description of the constraint, surfaced on rejection.
    const CONSTRAINTS: &'static str;

    /// Validity predicate over the raw primitive.
    fn is_valid(primitive: &Self::Primitive) -> bool;

    /// Fallible factory. Implementations call [`ValidatedValue::ensure_valid`]
    /// before wrapping.
    fn from_primitive(primitive: Self::Primitive) -> DomainResult<Self>;

    /// Copies out the underlying primitive.
    fn to_primitive(&self) -> Self::Primitive;

    /// Rejects a primitive that fails [`ValidatedValue::is_valid`] with
    /// [`DomainError::IllegalValue`] carrying [`ValidatedValue::CONSTRAINTS`].
    fn ensure_valid(primitive: &Self::Primitive) -> DomainResult<()> {
        if Self::is_valid(primitive) {
            Ok(())
        } else {
            Err(DomainError::illegal_value(Self::CONSTRAINTS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Even(u32);

    impl ValueObject for Even {}

    impl ValidatedValue for Even {
        type Primitive = u32;
        const CONSTRAINTS: &'static str = "value must be even";

        fn is_valid(primitive: &u32) -> bool {
            primitive % 2 == 0
        }

        fn from_primitive(primitive: u32) -> DomainResult<Self> {
            Self::ensure_valid(&primitive)?;
            Ok(Self(primitive))
        }

        fn to_primitive(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn from_primitive_accepts_valid_values() {
        let v = Even::from_primitive(4).unwrap();
        assert_eq!(v.to_primitive(), 4);
    }

    #[test]
    fn from_primitive_rejects_with_constraint_message() {
        let err = Even::from_primitive(3).unwrap_err();
        assert_eq!(err, DomainError::IllegalValue("value must be even".to_string()));
    }
}
