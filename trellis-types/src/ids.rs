//! Identifier types used throughout the Trellis core.
//!
//! Entity identifiers are UUID v7: globally unique, minted by the storage
//! backend at creation time, and time-ordered (the UUID embeds its
//! creation timestamp), so ids sort by creation order. Identity is
//! immutable after creation; entity equality everywhere in the model is
//! identifier equality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an entity in the data model.
///
/// Ordering follows creation time thanks to the v7 layout, which makes
/// id-sorted listings chronological for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a new entity ID with the current timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The all-zero identifier. Never minted by [`EntityId::new`]; useful
    /// as a placeholder key in fixtures and sentinel-free map defaults.
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// True for the all-zero identifier.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Creates an entity ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Milliseconds since the Unix epoch embedded in the identifier, or
    /// `None` for ids that carry no timestamp (e.g. [`EntityId::nil`]).
    #[must_use]
    pub fn timestamp_ms(&self) -> Option<u64> {
        self.0.get_timestamp().map(|ts| {
            let (secs, nanos) = ts.to_unix();
            secs * 1000 + u64::from(nanos) / 1_000_000
        })
    }

    /// Parses an entity ID from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
