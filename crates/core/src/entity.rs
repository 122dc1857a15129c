//! Entity trait: identity that survives changes to the other fields.

/// Entity marker + minimal interface.
///
/// Entities carry two notions of equality:
///
/// - **Identity** (`is_same`): do both values describe the same record? Used
///   for uniqueness checks and for locating update targets.
/// - **Value equality** (`PartialEq`): are all fields equal? Used when comparing
///   collection contents.
///
/// Two bikes with the same name but different statuses are the same entity
/// but not equal values.
pub trait Entity: PartialEq {
    /// Identity key. Unique within one collection.
    type Identity: Eq + core::fmt::Debug;

    /// Short lowercase noun used in error messages (e.g. `"bike"`).
    const KIND: &'static str;

    /// Returns the identity key.
    fn identity(&self) -> &Self::Identity;

    /// Identity comparison. Reflexive and symmetric.
    fn is_same(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
