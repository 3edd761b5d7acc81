//! Backend capability traits.
//!
//! Every concrete storage engine (file-based, in-memory, networked)
//! implements these traits; the entity façades consume them as shared
//! `Arc<dyn …>` handles and never touch storage directly. The traits are
//! object-safe and `Send + Sync` so handles can cross threads as read
//! views; mutation ordering is the caller's responsibility (single logical
//! writer).
//!
//! Error signaling follows the [`trellis_types::Error`] taxonomy. A
//! backend reports `NotFound` / `IndexOutOfRange` for failed lookups and
//! wraps its own failures (I/O, persistence) in `Error::Backend`, which
//! the façade layer propagates unchanged.

use std::sync::Arc;
use trellis_types::{LinkType, Result};

/// Storage surface common to every entity kind.
///
/// The identifier is assigned by the backend at creation time and is
/// immutable afterwards; everything else is mutable through the setters.
pub trait EntityBackend: Send + Sync {
    /// The entity's globally unique identifier.
    fn id(&self) -> String;

    /// Human-readable name.
    fn name(&self) -> Result<String>;

    /// Replaces the human-readable name. Stored verbatim.
    fn set_name(&self, name: &str) -> Result<()>;

    /// The entity's type tag.
    fn type_tag(&self) -> Result<String>;

    /// Replaces the type tag.
    fn set_type_tag(&self, type_tag: &str) -> Result<()>;

    /// Optional free-text definition.
    fn definition(&self) -> Result<Option<String>>;

    /// Sets or clears the definition.
    fn set_definition(&self, definition: Option<&str>) -> Result<()>;

    /// Optional reference to a metadata section, by identifier.
    /// Metadata content storage is not part of this interface.
    fn metadata(&self) -> Result<Option<String>>;

    /// Sets or clears the metadata reference.
    fn set_metadata(&self, section_id: Option<&str>) -> Result<()>;
}

/// Storage surface for a source node's direct children.
///
/// All operations address direct children only. Subtree semantics
/// (cascading deletion, depth-bounded search) live in the façade layer so
/// that every backend exhibits identical behavior; `delete_source` is
/// called on nodes whose own children have already been removed.
pub trait SourceBackend: EntityBackend {
    /// True iff a direct child with the given identifier exists.
    fn has_source(&self, id: &str) -> Result<bool>;

    /// The direct child with the given identifier, or `NotFound`.
    fn source(&self, id: &str) -> Result<Arc<dyn SourceBackend>>;

    /// The direct child at the given position, or `IndexOutOfRange`.
    /// Positions follow insertion order and are stable only until the
    /// next structural mutation.
    fn source_by_index(&self, index: usize) -> Result<Arc<dyn SourceBackend>>;

    /// Number of direct children.
    fn source_count(&self) -> Result<usize>;

    /// Creates a new direct child with a fresh backend-assigned
    /// identifier.
    fn create_source(&self, name: &str, type_tag: &str) -> Result<Arc<dyn SourceBackend>>;

    /// Removes the direct child with the given identifier. Returns false
    /// if the identifier names no direct child.
    fn delete_source(&self, id: &str) -> Result<bool>;
}

/// Storage surface for persisted array data.
///
/// The tree/link engine addresses arrays by identifier only; the numeric
/// payload itself is a storage-engine concern outside this interface.
pub trait DataArrayBackend: EntityBackend {}

/// Storage surface for a link-bearing entity (representation, feature).
pub trait LinkBackend: EntityBackend {
    /// Stores the link-type tag verbatim.
    fn set_link_type(&self, link_type: LinkType) -> Result<()>;

    /// The current link-type tag.
    fn link_type(&self) -> Result<LinkType>;

    /// Points the entity at the data array with the given identifier.
    /// No existence check; resolution happens in `data`.
    fn set_data(&self, array_id: &str) -> Result<()>;

    /// Resolves the stored data-array identifier, or `NotFound` if it no
    /// longer names an array.
    fn data(&self) -> Result<Arc<dyn DataArrayBackend>>;
}
