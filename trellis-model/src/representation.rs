//! The `Representation` façade.

use crate::backend::{EntityBackend, LinkBackend};
use crate::entity::Entity;
use crate::link::LinkBearing;
use std::fmt;
use std::sync::Arc;
use trellis_types::{Error, Result};

/// A link-bearing entity tying one data array to a link type.
#[derive(Clone)]
pub struct Representation {
    backend: Option<Arc<dyn LinkBackend>>,
}

impl Representation {
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

impl Entity for Representation {
    fn kind(&self) -> &'static str {
        "Representation"
    }

    fn entity_backend(&self) -> Result<&dyn EntityBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(Error::InvalidReference(
                "Representation: detached handle".into(),
            )),
        }
    }
}

impl LinkBearing for Representation {
    fn link_backend(&self) -> Result<&dyn LinkBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(Error::InvalidReference(
                "Representation: detached handle".into(),
            )),
        }
    }
}

impl PartialEq for Representation {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Some(a), Some(b)) => a.id() == b.id(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => f
                .debug_struct("Representation")
                .field("id", &backend.id())
                .finish(),
            None => f.write_str("Representation(none)"),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => write!(
                f,
                "Representation {{name = {}, type = {}, id = {}}}",
                backend.name().unwrap_or_default(),
                backend.type_tag().unwrap_or_default(),
                backend.id()
            ),
            None => f.write_str("Representation {none}"),
        }
    }
}
