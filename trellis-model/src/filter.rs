//! Filter predicates for child listing and subtree search.
//!
//! Filters are plain `Fn(&T) -> bool` values; [`accept_all`] is the
//! default predicate used when a caller wants everything.

/// The predicate that accepts every entity.
pub fn accept_all<T>(_: &T) -> bool {
    true
}

/// Builds a predicate matching entities with exactly the given name.
pub fn name_is<E: crate::Entity>(name: &str) -> impl Fn(&E) -> bool + '_ {
    move |entity| entity.name().map(|n| n == name).unwrap_or(false)
}

/// Builds a predicate matching entities with exactly the given type tag.
pub fn type_is<E: crate::Entity>(type_tag: &str) -> impl Fn(&E) -> bool + '_ {
    move |entity| entity.type_tag().map(|t| t == type_tag).unwrap_or(false)
}
