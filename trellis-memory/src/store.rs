//! The in-memory store handle and its entity factories.

use crate::node::{ArrayNode, LinkNode, SourceNode};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use trellis_model::backend::DataArrayBackend;
use trellis_model::{DataArray, Entity, Feature, Representation, Source};
use trellis_types::{Error, LinkType, Result};

/// Shared store state: the data-array registry used by link resolution.
///
/// Source trees need no registry — a root handle reaches its whole
/// subtree — but arrays are referenced by identifier from link-bearing
/// entities and must be resolvable store-wide.
#[derive(Default)]
pub(crate) struct StoreInner {
    arrays: RwLock<HashMap<String, Arc<ArrayNode>>>,
}

impl StoreInner {
    fn register_array(&self, node: Arc<ArrayNode>) {
        self.arrays
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(node.id().to_string(), node);
    }

    pub(crate) fn array(&self, id: &str) -> Result<Arc<dyn DataArrayBackend>> {
        self.arrays
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .map(|node| node as Arc<dyn DataArrayBackend>)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }
}

/// An in-memory entity store.
///
/// `MemoryStore` is a cheap handle over shared state; clones alias the
/// same store. Entities created here live as long as some handle still
/// references them — the store does not persist anything.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new root source with a fresh identifier.
    pub fn create_source(&self, name: &str, type_tag: &str) -> Source {
        let node = SourceNode::create(name, type_tag);
        debug!(id = %node.id(), name, "created root source");
        Source::new(node)
    }

    /// Creates and registers a new data array.
    pub fn create_data_array(&self, name: &str, type_tag: &str) -> DataArray {
        let node = ArrayNode::create(name, type_tag);
        debug!(id = %node.id(), name, "created data array");
        self.inner.register_array(node.clone());
        DataArray::new(node)
    }

    /// Looks up a registered data array by identifier.
    pub fn data_array(&self, id: &str) -> Result<DataArray> {
        Ok(DataArray::new(self.inner.array(id)?))
    }

    /// Creates a representation referencing `array` under `link_type`.
    ///
    /// Fails with `InvalidReference` if `array` is detached.
    pub fn create_representation(
        &self,
        name: &str,
        type_tag: &str,
        array: &DataArray,
        link_type: LinkType,
    ) -> Result<Representation> {
        if array.is_none() {
            return Err(Error::InvalidReference(
                "MemoryStore::create_representation: detached DataArray handle given".into(),
            ));
        }
        let node = LinkNode::create(name, type_tag, link_type, array.id()?, self.inner.clone());
        debug!(id = %node.id(), name, "created representation");
        Ok(Representation::new(node))
    }

    /// Creates a feature referencing `array` under `link_type`.
    ///
    /// Fails with `InvalidReference` if `array` is detached.
    pub fn create_feature(
        &self,
        name: &str,
        type_tag: &str,
        array: &DataArray,
        link_type: LinkType,
    ) -> Result<Feature> {
        if array.is_none() {
            return Err(Error::InvalidReference(
                "MemoryStore::create_feature: detached DataArray handle given".into(),
            ));
        }
        let node = LinkNode::create(name, type_tag, link_type, array.id()?, self.inner.clone());
        debug!(id = %node.id(), name, "created feature");
        Ok(Feature::new(node))
    }
}
