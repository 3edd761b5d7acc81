//! The `DataArray` façade.

use crate::backend::{DataArrayBackend, EntityBackend};
use crate::entity::Entity;
use std::fmt;
use std::sync::Arc;
use trellis_types::{Error, Result};

/// Persisted array data, referenced by identifier from other entities.
///
/// A data array implies no ownership: many representations or features may
/// reference the same array, and deleting a referrer never deletes the
/// array.
#[derive(Clone)]
pub struct DataArray {
    backend: Option<Arc<dyn DataArrayBackend>>,
}

impl DataArray {
    /// Wraps a backend handle in a façade.
    pub fn new(backend: Arc<dyn DataArrayBackend>) -> Self {
        Self { backend: Some(backend) }
    }

    /// The detached sentinel handle.
    #[must_use]
    pub fn none() -> Self {
        Self { backend: None }
    }

    /// Detaches this handle from backend state. The persisted entity is
    /// not deleted.
    pub fn detach(&mut self) {
        self.backend = None;
    }
}

impl Entity for DataArray {
    fn kind(&self) -> &'static str {
        "DataArray"
    }

    fn entity_backend(&self) -> Result<&dyn EntityBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(Error::InvalidReference("DataArray: detached handle".into())),
        }
    }
}

impl PartialEq for DataArray {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Some(a), Some(b)) => a.id() == b.id(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for DataArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => f.debug_struct("DataArray").field("id", &backend.id()).finish(),
            None => f.write_str("DataArray(none)"),
        }
    }
}

impl fmt::Display for DataArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => write!(
                f,
                "DataArray {{name = {}, type = {}, id = {}}}",
                backend.name().unwrap_or_default(),
                backend.type_tag().unwrap_or_default(),
                backend.id()
            ),
            None => f.write_str("DataArray {none}"),
        }
    }
}
