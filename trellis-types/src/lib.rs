//! Core type definitions for Trellis.
//!
//! This crate defines the fundamental, backend-agnostic types used
//! throughout the data model:
//! - Entity identifiers (UUID v7)
//! - The closed [`LinkType`] enumeration for link-bearing entities
//! - The shared error taxonomy every backend and façade reports through
//!
//! Concrete storage engines (file-based, in-memory, networked) depend on
//! this crate and nothing else in the workspace.

mod ids;
mod link;

pub use ids::EntityId;
pub use link::{LinkType, ParseLinkTypeError};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the entity model and by storage backends.
///
/// Validation failures (`InvalidReference`) are raised by the façade layer
/// before any backend call is made, so an invalid-argument call never causes
/// a partial backend mutation. Everything else originates at or below the
/// backend boundary and surfaces to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A detached (null) entity handle was passed where a valid reference
    /// is required. Carries the operation that rejected it.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// An identifier did not resolve to an existing entity.
    #[error("no entity with id {id} found")]
    NotFound { id: String },

    /// A positional lookup lay beyond the current element count.
    #[error("index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// A backend-specific failure, propagated unchanged.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wraps a backend-specific failure for opaque propagation.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}
