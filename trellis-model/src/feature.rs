//! The `Feature` façade.

use crate::backend::{EntityBackend, LinkBackend};
use crate::entity::Entity;
use crate::link::LinkBearing;
use std::fmt;
use std::sync::Arc;
use trellis_types::{Error, Result};

/// A link-bearing entity marking one data array as a feature of its
/// owner, under a link type.
///
/// Features and representations share the whole link contract through
/// [`LinkBearing`]; they differ only in the role they play for the entity
/// that owns them.
#[derive(Clone)]
pub struct Feature {
    backend: Option<Arc<dyn LinkBackend>>,
}

impl Feature {
    /// Wraps a backend handle in a façade.
    pub fn new(backend: Arc<dyn LinkBackend>) -> Self {
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

impl Entity for Feature {
    fn kind(&self) -> &'static str {
        "Feature"
    }

    fn entity_backend(&self) -> Result<&dyn EntityBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(Error::InvalidReference("Feature: detached handle".into())),
        }
    }
}

impl LinkBearing for Feature {
    fn link_backend(&self) -> Result<&dyn LinkBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(Error::InvalidReference("Feature: detached handle".into())),
        }
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Some(a), Some(b)) => a.id() == b.id(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => f.debug_struct("Feature").field("id", &backend.id()).finish(),
            None => f.write_str("Feature(none)"),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => write!(
                f,
                "Feature {{name = {}, type = {}, id = {}}}",
                backend.name().unwrap_or_default(),
                backend.type_tag().unwrap_or_default(),
                backend.id()
            ),
            None => f.write_str("Feature {none}"),
        }
    }
}
