//! Direct-child operations of the tree engine over the memory backend.

use pretty_assertions::assert_eq;
use trellis_memory::MemoryStore;
use trellis_model::{Entity, Source};
use trellis_types::Error;

fn make_root() -> Source {
    MemoryStore::new().create_source("root", "session")
}

// ── Existence & counting ─────────────────────────────────────────

#[test]
fn created_child_is_immediately_visible() {
    let root = make_root();
    let child = root.create_source("electrode", "probe").unwrap();

    assert!(root.has_source(&child.id().unwrap()).unwrap());
    assert!(root.has_source_entity(&child).unwrap());
    assert_eq!(root.source_count().unwrap(), 1);
}

#[test]
fn empty_root_has_no_children() {
    let root = make_root();
    assert_eq!(root.source_count().unwrap(), 0);
    assert!(!root.has_source("no-such-id").unwrap());
    assert_eq!(root.sources().unwrap().len(), 0);
}

#[test]
fn has_source_is_direct_children_only() {
    let root = make_root();
    let child = root.create_source("child", "probe").unwrap();
    let grandchild = child.create_source("grandchild", "contact").unwrap();

    assert!(!root.has_source(&grandchild.id().unwrap()).unwrap());
    assert!(child.has_source(&grandchild.id().unwrap()).unwrap());
}

// ── Keyed & indexed lookup ───────────────────────────────────────

#[test]
fn source_by_id_returns_the_child() {
    let root = make_root();
    let child = root.create_source("a", "probe").unwrap();

    let fetched = root.source(&child.id().unwrap()).unwrap();
    assert!(fetched == child);
    assert_eq!(fetched.name().unwrap(), "a");
}

#[test]
fn source_by_unknown_id_is_not_found() {
    let root = make_root();
    match root.source("missing") {
        Err(Error::NotFound { id }) => assert_eq!(id, "missing"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn children_keep_insertion_order() {
    let root = make_root();
    let a = root.create_source("a", "t").unwrap();
    let b = root.create_source("b", "t").unwrap();
    let c = root.create_source("c", "t").unwrap();

    assert!(root.source_by_index(0).unwrap() == a);
    assert!(root.source_by_index(1).unwrap() == b);
    assert!(root.source_by_index(2).unwrap() == c);
}

#[test]
fn index_past_count_is_out_of_range() {
    let root = make_root();
    root.create_source("only", "t").unwrap();

    match root.source_by_index(1) {
        Err(Error::IndexOutOfRange { index, count }) => {
            assert_eq!(index, 1);
            assert_eq!(count, 1);
        }
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn index_shifts_after_deletion() {
    let root = make_root();
    let a = root.create_source("a", "t").unwrap();
    let b = root.create_source("b", "t").unwrap();

    root.delete_source(&a.id().unwrap()).unwrap();
    assert!(root.source_by_index(0).unwrap() == b);
}

// ── Child listing ────────────────────────────────────────────────

#[test]
fn sources_matches_source_count() {
    let root = make_root();
    for i in 0..5 {
        root.create_source(&format!("s{i}"), "t").unwrap();
    }
    assert_eq!(root.sources().unwrap().len(), root.source_count().unwrap());
}

#[test]
fn sources_filtered_keeps_order_and_membership() {
    let root = make_root();
    root.create_source("keep-1", "t").unwrap();
    root.create_source("drop", "t").unwrap();
    root.create_source("keep-2", "t").unwrap();

    let kept = root
        .sources_filtered(|s| s.name().map(|n| n.starts_with("keep")).unwrap_or(false))
        .unwrap();
    let names: Vec<String> = kept.iter().map(|s| s.name().unwrap()).collect();
    assert_eq!(names, vec!["keep-1", "keep-2"]);
}

#[test]
fn returned_listing_is_a_snapshot() {
    let root = make_root();
    let a = root.create_source("a", "t").unwrap();
    let listing = root.sources().unwrap();

    // A later structural mutation must not change the already-returned
    // sequence.
    root.delete_source(&a.id().unwrap()).unwrap();
    assert_eq!(listing.len(), 1);
    assert!(listing[0] == a);
    assert_eq!(root.source_count().unwrap(), 0);
}

// ── Deletion ─────────────────────────────────────────────────────

#[test]
fn delete_returns_false_for_unknown_id() {
    let root = make_root();
    assert!(!root.delete_source("no-such-id").unwrap());
}

#[test]
fn delete_returns_false_for_non_direct_descendant() {
    let root = make_root();
    let child = root.create_source("child", "t").unwrap();
    let grandchild = child.create_source("grandchild", "t").unwrap();

    assert!(!root.delete_source(&grandchild.id().unwrap()).unwrap());
    assert!(child.has_source(&grandchild.id().unwrap()).unwrap());
}

#[test]
fn delete_removes_child_and_all_descendants() {
    let root = make_root();
    let child = root.create_source("child", "t").unwrap();
    let grandchild = child.create_source("grandchild", "t").unwrap();
    let great = grandchild.create_source("great", "t").unwrap();

    assert!(root.delete_source(&child.id().unwrap()).unwrap());

    assert!(!root.has_source(&child.id().unwrap()).unwrap());
    let remaining = root.find_all_sources().unwrap();
    for gone in [&child, &grandchild, &great] {
        assert!(
            !remaining.iter().any(|s| s == gone),
            "descendant still reachable after cascade"
        );
    }
}

#[test]
fn delete_by_entity_handle() {
    let root = make_root();
    let child = root.create_source("child", "t").unwrap();

    assert!(root.delete_source_entity(&child).unwrap());
    assert!(!root.has_source(&child.id().unwrap()).unwrap());
}

#[test]
fn delete_with_detached_handle_is_rejected_and_mutates_nothing() {
    let root = make_root();
    root.create_source("child", "t").unwrap();

    let result = root.delete_source_entity(&Source::none());
    assert!(matches!(result, Err(Error::InvalidReference(_))));
    assert_eq!(root.source_count().unwrap(), 1);
}

#[test]
fn deleting_one_sibling_leaves_the_other() {
    let root = make_root();
    let a = root.create_source("a", "t").unwrap();
    let b = root.create_source("b", "t").unwrap();

    root.delete_source(&a.id().unwrap()).unwrap();
    assert!(root.has_source(&b.id().unwrap()).unwrap());
    assert_eq!(root.source_count().unwrap(), 1);
}
