//! The entity surface shared by every façade kind.

use crate::backend::EntityBackend;
use trellis_types::Result;

/// Read/write surface common to all entity façades.
///
/// A façade is a cheap handle: cloning it aliases the same backend state,
/// and a handle may be *detached* (the null sentinel), in which case every
/// operation fails with `InvalidReference` instead of reaching the
/// backend. Equality between two handles of the same kind is identifier
/// equality, independent of any cached local state.
pub trait Entity {
    /// Entity kind name used in error contexts ("Source", "DataArray", …).
    fn kind(&self) -> &'static str;

    /// The backing storage surface, or `InvalidReference` when detached.
    fn entity_backend(&self) -> Result<&dyn EntityBackend>;

    /// True when this handle is the detached sentinel.
    fn is_none(&self) -> bool {
        self.entity_backend().is_err()
    }

    /// The entity's globally unique identifier.
    fn id(&self) -> Result<String> {
        Ok(self.entity_backend()?.id())
    }

    /// Human-readable name.
    fn name(&self) -> Result<String> {
        self.entity_backend()?.name()
    }

    /// Replaces the human-readable name.
    fn set_name(&self, name: &str) -> Result<()> {
        self.entity_backend()?.set_name(name)
    }

    /// The entity's type tag.
    fn type_tag(&self) -> Result<String> {
        self.entity_backend()?.type_tag()
    }

    /// Replaces the type tag.
    fn set_type_tag(&self, type_tag: &str) -> Result<()> {
        self.entity_backend()?.set_type_tag(type_tag)
    }

    /// Optional free-text definition.
    fn definition(&self) -> Result<Option<String>> {
        self.entity_backend()?.definition()
    }

    /// Sets or clears the definition.
    fn set_definition(&self, definition: Option<&str>) -> Result<()> {
        self.entity_backend()?.set_definition(definition)
    }

    /// Optional metadata-section reference, by identifier.
    fn metadata(&self) -> Result<Option<String>> {
        self.entity_backend()?.metadata()
    }

    /// Sets or clears the metadata reference.
    fn set_metadata(&self, section_id: Option<&str>) -> Result<()> {
        self.entity_backend()?.set_metadata(section_id)
    }
}
