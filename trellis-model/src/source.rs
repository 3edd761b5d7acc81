//! The `Source` façade and the hierarchical tree engine.
//!
//! Sources form a forest: each source owns an ordered list of child
//! sources, children are created under a parent and never reparented, and
//! deleting a child removes its entire subtree. The containment relation
//! is therefore acyclic by construction.
//!
//! The engine layers three behaviors over the raw [`SourceBackend`]
//! operations:
//! - eager filtered child listing ([`Source::sources_filtered`])
//! - depth-bounded pre-order subtree search ([`Source::find_sources`])
//! - explicit post-order cascade deletion ([`Source::delete_source`]),
//!   so that backends only ever delete leaf-stripped direct children and
//!   every backend exhibits identical cascade semantics

use crate::backend::{EntityBackend, SourceBackend};
use crate::entity::Entity;
use crate::filter;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use trellis_types::{Error, Result};

/// A node in the hierarchical containment tree of domain entities.
///
/// `Source` is a cheap handle: cloning aliases the same backend state.
/// A detached handle (from [`Source::none`] or [`Source::detach`]) fails
/// every operation with `InvalidReference` and compares equal only to
/// other detached handles.
#[derive(Clone)]
pub struct Source {
    backend: Option<Arc<dyn SourceBackend>>,
}

impl Source {
    /// Wraps a backend handle in a façade.
    pub fn new(backend: Arc<dyn SourceBackend>) -> Self {
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

    fn backend(&self, op: &str) -> Result<&Arc<dyn SourceBackend>> {
        self.backend
            .as_ref()
            .ok_or_else(|| Error::InvalidReference(format!("{op}: detached Source handle")))
    }

    // ── Child sources ────────────────────────────────────────────

    /// True iff a direct child with the given identifier exists.
    pub fn has_source(&self, id: &str) -> Result<bool> {
        self.backend("Source::has_source")?.has_source(id)
    }

    /// True iff the given source is a direct child of this one.
    ///
    /// Fails with `InvalidReference` if `source` is detached.
    pub fn has_source_entity(&self, source: &Source) -> Result<bool> {
        if source.is_none() {
            return Err(Error::InvalidReference(
                "Source::has_source_entity: detached Source handle given".into(),
            ));
        }
        self.backend("Source::has_source_entity")?
            .has_source(&source.id()?)
    }

    /// The direct child with the given identifier, or `NotFound`.
    pub fn source(&self, id: &str) -> Result<Source> {
        Ok(Source::new(self.backend("Source::source")?.source(id)?))
    }

    /// The direct child at the given position, or `IndexOutOfRange`.
    ///
    /// Positions follow insertion order and are stable only until the
    /// next structural mutation.
    pub fn source_by_index(&self, index: usize) -> Result<Source> {
        Ok(Source::new(
            self.backend("Source::source_by_index")?.source_by_index(index)?,
        ))
    }

    /// Number of direct children.
    pub fn source_count(&self) -> Result<usize> {
        self.backend("Source::source_count")?.source_count()
    }

    /// All direct children, in insertion order.
    pub fn sources(&self) -> Result<Vec<Source>> {
        self.sources_filtered(filter::accept_all)
    }

    /// Direct children for which `filter` returns true, in insertion
    /// order.
    ///
    /// The returned vector is computed eagerly on each call; a later
    /// structural mutation does not retroactively change it.
    pub fn sources_filtered<F>(&self, filter: F) -> Result<Vec<Source>>
    where
        F: Fn(&Source) -> bool,
    {
        let backend = self.backend("Source::sources_filtered")?;
        let count = backend.source_count()?;
        let mut children = Vec::with_capacity(count);
        for index in 0..count {
            let child = Source::new(backend.source_by_index(index)?);
            if filter(&child) {
                children.push(child);
            }
        }
        Ok(children)
    }

    // ── Subtree search ───────────────────────────────────────────

    /// Pre-order, depth-bounded search of the subtree rooted here.
    ///
    /// Every node within `max_depth` edges of this source (the root is
    /// depth 0, the bound is inclusive) is visited exactly once and
    /// tested by `filter`; matching nodes appear in the result in visit
    /// order. Filtering controls membership only — a node failing the
    /// filter is excluded but its children are still visited. A backend
    /// failure mid-walk aborts the search and propagates.
    pub fn find_sources<F>(&self, filter: F, max_depth: usize) -> Result<Vec<Source>>
    where
        F: Fn(&Source) -> bool,
    {
        self.backend("Source::find_sources")?;
        let mut found = Vec::new();
        let mut stack: Vec<(Source, usize)> = vec![(self.clone(), 0)];
        while let Some((node, depth)) = stack.pop() {
            if filter(&node) {
                found.push(node.clone());
            }
            if depth < max_depth {
                // Children are pushed in reverse so the leftmost child is
                // visited next, keeping the walk pre-order.
                for child in node.sources()?.into_iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        Ok(found)
    }

    /// Every source in the subtree rooted here, unbounded, pre-order.
    pub fn find_all_sources(&self) -> Result<Vec<Source>> {
        self.find_sources(filter::accept_all, usize::MAX)
    }

    // ── Structural mutation ──────────────────────────────────────

    /// Creates a new direct child with the given name and type tag. The
    /// backend assigns the fresh identifier.
    pub fn create_source(&self, name: &str, type_tag: &str) -> Result<Source> {
        let child = self
            .backend("Source::create_source")?
            .create_source(name, type_tag)?;
        debug!(parent = %self.id()?, child = %child.id(), name, "created child source");
        Ok(Source::new(child))
    }

    /// Deletes the direct child with the given identifier together with
    /// its entire subtree. Returns false if the identifier names no
    /// direct child.
    ///
    /// The cascade is performed here, post-order: descendants are removed
    /// bottom-up through backend calls before the child itself, so the
    /// backend never has to delete a node that still has children.
    pub fn delete_source(&self, id: &str) -> Result<bool> {
        let backend = self.backend("Source::delete_source")?;
        if !backend.has_source(id)? {
            return Ok(false);
        }
        let child = Source::new(backend.source(id)?);
        child.delete_subtree()?;
        let deleted = backend.delete_source(id)?;
        debug!(parent = %self.id()?, child = id, deleted, "deleted child source");
        Ok(deleted)
    }

    /// Deletes the given direct child and its subtree.
    ///
    /// Fails with `InvalidReference` if `source` is detached.
    pub fn delete_source_entity(&self, source: &Source) -> Result<bool> {
        if source.is_none() {
            return Err(Error::InvalidReference(
                "Source::delete_source_entity: detached Source handle given".into(),
            ));
        }
        self.delete_source(&source.id()?)
    }

    /// Removes all children of this node, deepest first.
    fn delete_subtree(&self) -> Result<()> {
        let backend = self.backend("Source::delete_subtree")?;
        while backend.source_count()? > 0 {
            let child = Source::new(backend.source_by_index(0)?);
            child.delete_subtree()?;
            backend.delete_source(&child.id()?)?;
        }
        Ok(())
    }
}

impl Entity for Source {
    fn kind(&self) -> &'static str {
        "Source"
    }

    fn entity_backend(&self) -> Result<&dyn EntityBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(Error::InvalidReference("Source: detached handle".into())),
        }
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Some(a), Some(b)) => a.id() == b.id(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => f.debug_struct("Source").field("id", &backend.id()).finish(),
            None => f.write_str("Source(none)"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => write!(
                f,
                "Source {{name = {}, type = {}, id = {}}}",
                backend.name().unwrap_or_default(),
                backend.type_tag().unwrap_or_default(),
                backend.id()
            ),
            None => f.write_str("Source {none}"),
        }
    }
}
