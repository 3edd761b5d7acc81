//! Backend node types implementing the capability traits.

use crate::store::StoreInner;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use trellis_model::backend::{DataArrayBackend, EntityBackend, LinkBackend, SourceBackend};
use trellis_types::{EntityId, Error, LinkType, Result};

/// Mutable per-entity fields guarded by the node's lock.
struct EntityState {
    name: String,
    type_tag: String,
    definition: Option<String>,
    metadata: Option<String>,
}

/// Identifier plus locked entity state, shared by every node kind.
///
/// A poisoned lock carries the last written state; under the
/// single-logical-writer model that state is the valid one, so poison is
/// stripped rather than surfaced.
pub(crate) struct EntityCore {
    id: String,
    state: RwLock<EntityState>,
}

impl EntityCore {
    fn new(name: &str, type_tag: &str) -> Self {
        Self {
            id: EntityId::new().to_string(),
            state: RwLock::new(EntityState {
                name: name.to_string(),
                type_tag: type_tag.to_string(),
                definition: None,
                metadata: None,
            }),
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> RwLockReadGuard<'_, EntityState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EntityState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Source nodes ─────────────────────────────────────────────────

/// A tree node. Children are held in insertion order; dropping the last
/// `Arc` to a removed child frees its whole subtree.
pub(crate) struct SourceNode {
    core: EntityCore,
    children: RwLock<Vec<Arc<SourceNode>>>,
}

impl SourceNode {
    pub(crate) fn create(name: &str, type_tag: &str) -> Arc<Self> {
        Arc::new(Self {
            core: EntityCore::new(name, type_tag),
            children: RwLock::new(Vec::new()),
        })
    }

    pub(crate) fn id(&self) -> &str {
        self.core.id()
    }

    fn children(&self) -> RwLockReadGuard<'_, Vec<Arc<SourceNode>>> {
        self.children.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn children_mut(&self) -> RwLockWriteGuard<'_, Vec<Arc<SourceNode>>> {
        self.children.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntityBackend for SourceNode {
    fn id(&self) -> String {
        self.core.id.clone()
    }

    fn name(&self) -> Result<String> {
        Ok(self.core.read().name.clone())
    }

    fn set_name(&self, name: &str) -> Result<()> {
        self.core.write().name = name.to_string();
        Ok(())
    }

    fn type_tag(&self) -> Result<String> {
        Ok(self.core.read().type_tag.clone())
    }

    fn set_type_tag(&self, type_tag: &str) -> Result<()> {
        self.core.write().type_tag = type_tag.to_string();
        Ok(())
    }

    fn definition(&self) -> Result<Option<String>> {
        Ok(self.core.read().definition.clone())
    }

    fn set_definition(&self, definition: Option<&str>) -> Result<()> {
        self.core.write().definition = definition.map(str::to_string);
        Ok(())
    }

    fn metadata(&self) -> Result<Option<String>> {
        Ok(self.core.read().metadata.clone())
    }

    fn set_metadata(&self, section_id: Option<&str>) -> Result<()> {
        self.core.write().metadata = section_id.map(str::to_string);
        Ok(())
    }
}

impl SourceBackend for SourceNode {
    fn has_source(&self, id: &str) -> Result<bool> {
        Ok(self.children().iter().any(|child| child.core.id == id))
    }

    fn source(&self, id: &str) -> Result<Arc<dyn SourceBackend>> {
        self.children()
            .iter()
            .find(|child| child.core.id == id)
            .cloned()
            .map(|child| child as Arc<dyn SourceBackend>)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    fn source_by_index(&self, index: usize) -> Result<Arc<dyn SourceBackend>> {
        let children = self.children();
        children
            .get(index)
            .cloned()
            .map(|child| child as Arc<dyn SourceBackend>)
            .ok_or(Error::IndexOutOfRange {
                index,
                count: children.len(),
            })
    }

    fn source_count(&self) -> Result<usize> {
        Ok(self.children().len())
    }

    fn create_source(&self, name: &str, type_tag: &str) -> Result<Arc<dyn SourceBackend>> {
        let child = SourceNode::create(name, type_tag);
        debug!(parent = %self.core.id, child = %child.core.id, name, "created source node");
        self.children_mut().push(child.clone());
        Ok(child)
    }

    fn delete_source(&self, id: &str) -> Result<bool> {
        let mut children = self.children_mut();
        match children.iter().position(|child| child.core.id == id) {
            Some(position) => {
                children.remove(position);
                debug!(parent = %self.core.id, child = id, "removed source node");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Data-array nodes ─────────────────────────────────────────────

/// A registered data array. The numeric payload is out of scope for the
/// tree/link engine; the node only carries the entity surface.
pub(crate) struct ArrayNode {
    core: EntityCore,
}

impl ArrayNode {
    pub(crate) fn create(name: &str, type_tag: &str) -> Arc<Self> {
        Arc::new(Self {
            core: EntityCore::new(name, type_tag),
        })
    }

    pub(crate) fn id(&self) -> &str {
        self.core.id()
    }
}

impl EntityBackend for ArrayNode {
    fn id(&self) -> String {
        self.core.id.clone()
    }

    fn name(&self) -> Result<String> {
        Ok(self.core.read().name.clone())
    }

    fn set_name(&self, name: &str) -> Result<()> {
        self.core.write().name = name.to_string();
        Ok(())
    }

    fn type_tag(&self) -> Result<String> {
        Ok(self.core.read().type_tag.clone())
    }

    fn set_type_tag(&self, type_tag: &str) -> Result<()> {
        self.core.write().type_tag = type_tag.to_string();
        Ok(())
    }

    fn definition(&self) -> Result<Option<String>> {
        Ok(self.core.read().definition.clone())
    }

    fn set_definition(&self, definition: Option<&str>) -> Result<()> {
        self.core.write().definition = definition.map(str::to_string);
        Ok(())
    }

    fn metadata(&self) -> Result<Option<String>> {
        Ok(self.core.read().metadata.clone())
    }

    fn set_metadata(&self, section_id: Option<&str>) -> Result<()> {
        self.core.write().metadata = section_id.map(str::to_string);
        Ok(())
    }
}

impl DataArrayBackend for ArrayNode {}

// ── Link-bearing nodes ───────────────────────────────────────────

/// Backing state for a representation or feature: one data-array
/// identifier (never empty once constructed) and one link-type tag. Holds
/// the store's array registry for resolution.
pub(crate) struct LinkNode {
    core: EntityCore,
    link_type: RwLock<LinkType>,
    data_id: RwLock<String>,
    store: Arc<StoreInner>,
}

impl LinkNode {
    pub(crate) fn create(
        name: &str,
        type_tag: &str,
        link_type: LinkType,
        data_id: String,
        store: Arc<StoreInner>,
    ) -> Arc<Self> {
        Arc::new(Self {
            core: EntityCore::new(name, type_tag),
            link_type: RwLock::new(link_type),
            data_id: RwLock::new(data_id),
            store,
        })
    }

    pub(crate) fn id(&self) -> &str {
        self.core.id()
    }
}

impl EntityBackend for LinkNode {
    fn id(&self) -> String {
        self.core.id.clone()
    }

    fn name(&self) -> Result<String> {
        Ok(self.core.read().name.clone())
    }

    fn set_name(&self, name: &str) -> Result<()> {
        self.core.write().name = name.to_string();
        Ok(())
    }

    fn type_tag(&self) -> Result<String> {
        Ok(self.core.read().type_tag.clone())
    }

    fn set_type_tag(&self, type_tag: &str) -> Result<()> {
        self.core.write().type_tag = type_tag.to_string();
        Ok(())
    }

    fn definition(&self) -> Result<Option<String>> {
        Ok(self.core.read().definition.clone())
    }

    fn set_definition(&self, definition: Option<&str>) -> Result<()> {
        self.core.write().definition = definition.map(str::to_string);
        Ok(())
    }

    fn metadata(&self) -> Result<Option<String>> {
        Ok(self.core.read().metadata.clone())
    }

    fn set_metadata(&self, section_id: Option<&str>) -> Result<()> {
        self.core.write().metadata = section_id.map(str::to_string);
        Ok(())
    }
}

impl LinkBackend for LinkNode {
    fn set_link_type(&self, link_type: LinkType) -> Result<()> {
        *self
            .link_type
            .write()
            .unwrap_or_else(PoisonError::into_inner) = link_type;
        Ok(())
    }

    fn link_type(&self) -> Result<LinkType> {
        Ok(*self.link_type.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn set_data(&self, array_id: &str) -> Result<()> {
        *self.data_id.write().unwrap_or_else(PoisonError::into_inner) = array_id.to_string();
        Ok(())
    }

    fn data(&self) -> Result<Arc<dyn DataArrayBackend>> {
        let array_id = self
            .data_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        self.store.array(&array_id)
    }
}
