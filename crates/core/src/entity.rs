//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    ///
    /// `None` until the entity has been accepted by the collection that
    /// assigns identifiers.
    fn id(&self) -> Option<&Self::Id>;

    /// Whether the entity has been assigned an identifier yet.
    fn is_identified(&self) -> bool {
        self.id().is_some()
    }
}
