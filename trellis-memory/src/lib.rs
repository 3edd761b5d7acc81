//! In-memory reference backend for the Trellis entity model.
//!
//! Implements every capability trait from [`trellis_model::backend`] over
//! plain process memory. It is the conformance model for the engine: the
//! integration tests in this crate pin down the traversal, deletion and
//! link-resolution semantics that every other backend (file-based,
//! networked) must reproduce identically.
//!
//! Nothing here persists. Backend state lives as long as some handle
//! (store or façade) still references it; the engine assumes a single
//! logical writer, and the internal locks exist only so handles satisfy
//! `Send + Sync`.

mod node;
mod store;

pub use store::MemoryStore;
