//! Link resolution for link-bearing entities.

use crate::backend::LinkBackend;
use crate::data_array::DataArray;
use crate::entity::Entity;
use trellis_types::{Error, LinkType, Result};

/// Surface of an entity that references exactly one data array under a
/// [`LinkType`].
///
/// Implemented by [`crate::Representation`] and [`crate::Feature`]. The
/// default method bodies carry the whole contract; implementors only
/// provide access to their backing [`LinkBackend`].
///
/// The data reference is never null once established: setting it from a
/// detached [`DataArray`] handle fails with `InvalidReference` before any
/// backend call, leaving the existing reference unchanged.
pub trait LinkBearing: Entity {
    /// The backing link surface, or `InvalidReference` when detached.
    fn link_backend(&self) -> Result<&dyn LinkBackend>;

    /// Stores the link-type tag.
    fn set_link_type(&self, link_type: LinkType) -> Result<()> {
        self.link_backend()?.set_link_type(link_type)
    }

    /// The current link-type tag.
    fn link_type(&self) -> Result<LinkType> {
        self.link_backend()?.link_type()
    }

    /// Points this entity at the data array with the given identifier.
    ///
    /// No local existence check: an identifier that resolves to nothing
    /// surfaces later, as a backend `NotFound` from [`LinkBearing::data`].
    fn set_data_id(&self, array_id: &str) -> Result<()> {
        self.link_backend()?.set_data(array_id)
    }

    /// Points this entity at the given data array.
    ///
    /// Fails with `InvalidReference` if `array` is detached.
    fn set_data(&self, array: &DataArray) -> Result<()> {
        if array.is_none() {
            return Err(Error::InvalidReference(format!(
                "{}::set_data: detached DataArray handle given",
                self.kind()
            )));
        }
        let array_id = array.id()?;
        self.link_backend()?.set_data(&array_id)
    }

    /// Resolves the referenced data array via the backend.
    fn data(&self) -> Result<DataArray> {
        Ok(DataArray::new(self.link_backend()?.data()?))
    }
}
