//! Entity model for Trellis.
//!
//! The front end of the data model: typed, cheaply clonable entity handles
//! over a swappable storage backend.
//!
//! - [`backend`] — the capability traits every storage engine implements
//! - [`Entity`] — the id/name/type surface shared by all entity kinds
//! - [`Source`] — a node in the hierarchical containment tree, with
//!   filtered child listing, depth-bounded subtree search and cascading
//!   deletion
//! - [`DataArray`] — persisted array data, referenced by identifier from
//!   other entities
//! - [`Representation`] / [`Feature`] — link-bearing entities tying one
//!   data array to a [`trellis_types::LinkType`]
//!
//! Façades validate their arguments (detached-handle checks) before any
//! backend call, so an invalid-argument call never causes a partial
//! backend mutation. Everything past validation is a pure pass-through to
//! the backend traits.

pub mod backend;
pub mod filter;

mod data_array;
mod entity;
mod feature;
mod link;
mod representation;
mod source;

pub use data_array::DataArray;
pub use entity::Entity;
pub use feature::Feature;
pub use link::LinkBearing;
pub use representation::Representation;
pub use source::Source;
