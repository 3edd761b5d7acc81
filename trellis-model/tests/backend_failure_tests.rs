//! Backend-failure propagation through the tree engine.
//!
//! A traversal or cascade that hits a backend failure mid-walk must abort
//! and surface that failure unchanged — never a partial result. The
//! backend here can be armed to fail `source_count` or `source_by_index`
//! on chosen nodes.

use std::sync::{Arc, RwLock};
use trellis_model::backend::{EntityBackend, SourceBackend};
use trellis_model::{filter, Source};
use trellis_types::{Error, Result};

#[derive(Clone, Copy, PartialEq)]
enum Fault {
    None,
    CountFails,
    IndexFails,
}

fn storage_offline() -> Error {
    Error::backend(std::io::Error::other("storage offline"))
}

/// A source node whose child accessors can be armed to fail.
struct FaultyNode {
    id: String,
    fault: Fault,
    children: RwLock<Vec<Arc<FaultyNode>>>,
}

impl FaultyNode {
    fn new(id: &str, fault: Fault, children: Vec<Arc<FaultyNode>>) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            fault,
            children: RwLock::new(children),
        })
    }
}

impl EntityBackend for FaultyNode {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn name(&self) -> Result<String> {
        Ok(self.id.clone())
    }

    fn set_name(&self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn type_tag(&self) -> Result<String> {
        Ok("node".to_string())
    }

    fn set_type_tag(&self, _type_tag: &str) -> Result<()> {
        Ok(())
    }

    fn definition(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_definition(&self, _definition: Option<&str>) -> Result<()> {
        Ok(())
    }

    fn metadata(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_metadata(&self, _section_id: Option<&str>) -> Result<()> {
        Ok(())
    }
}

impl SourceBackend for FaultyNode {
    fn has_source(&self, id: &str) -> Result<bool> {
        Ok(self
            .children
            .read()
            .unwrap()
            .iter()
            .any(|child| child.id == id))
    }

    fn source(&self, id: &str) -> Result<Arc<dyn SourceBackend>> {
        self.children
            .read()
            .unwrap()
            .iter()
            .find(|child| child.id == id)
            .cloned()
            .map(|child| child as Arc<dyn SourceBackend>)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    fn source_by_index(&self, index: usize) -> Result<Arc<dyn SourceBackend>> {
        if self.fault == Fault::IndexFails {
            return Err(storage_offline());
        }
        let children = self.children.read().unwrap();
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
        if self.fault == Fault::CountFails {
            return Err(storage_offline());
        }
        Ok(self.children.read().unwrap().len())
    }

    fn create_source(&self, _name: &str, _type_tag: &str) -> Result<Arc<dyn SourceBackend>> {
        Err(storage_offline())
    }

    fn delete_source(&self, id: &str) -> Result<bool> {
        let mut children = self.children.write().unwrap();
        match children.iter().position(|child| child.id == id) {
            Some(position) => {
                children.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn assert_storage_offline<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::Backend(err)) => assert_eq!(err.to_string(), "storage offline"),
        other => panic!("expected the backend failure, got {other:?}"),
    }
}

/// Root with healthy child `a` (which has child `a1`) and armed child `b`.
fn make_tree(fault: Fault) -> Source {
    let a1 = FaultyNode::new("a1", Fault::None, vec![]);
    let a = FaultyNode::new("a", Fault::None, vec![a1]);
    let b = FaultyNode::new("b", fault, vec![FaultyNode::new("b1", Fault::None, vec![])]);
    Source::new(FaultyNode::new("root", Fault::None, vec![a, b]))
}

// ── Traversal ────────────────────────────────────────────────────

#[test]
fn find_sources_aborts_on_count_failure() {
    let root = make_tree(Fault::CountFails);
    assert_storage_offline(root.find_sources(filter::accept_all, usize::MAX));
}

#[test]
fn find_sources_aborts_on_index_failure() {
    let root = make_tree(Fault::IndexFails);
    assert_storage_offline(root.find_all_sources());
}

#[test]
fn depth_zero_never_touches_failing_children() {
    // The bound stops the walk before any child accessor runs.
    let root = make_tree(Fault::CountFails);
    let found = root.find_sources(filter::accept_all, 0).unwrap();
    assert_eq!(found.len(), 1);
}

// ── Child listing ────────────────────────────────────────────────

#[test]
fn sources_propagates_index_failure() {
    let broken = Source::new(FaultyNode::new(
        "broken",
        Fault::IndexFails,
        vec![FaultyNode::new("child", Fault::None, vec![])],
    ));
    assert_storage_offline(broken.sources());
}

#[test]
fn source_count_propagates_count_failure() {
    let broken = Source::new(FaultyNode::new("broken", Fault::CountFails, vec![]));
    assert_storage_offline(broken.source_count());
}

// ── Cascade deletion ─────────────────────────────────────────────

#[test]
fn delete_source_aborts_when_cascade_hits_a_failure() {
    let root = make_tree(Fault::CountFails);
    assert_storage_offline(root.delete_source("b"));
}

#[test]
fn delete_source_of_healthy_sibling_still_succeeds() {
    let root = make_tree(Fault::CountFails);
    assert!(root.delete_source("a").unwrap());
    assert!(!root.has_source("a").unwrap());
}
