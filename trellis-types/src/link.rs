//! The closed link-type enumeration for link-bearing entities.
//!
//! A Representation or Feature references exactly one data array under one
//! of these semantics. The tree/link engine treats the tag as opaque: it is
//! stored and returned verbatim, with the engine responsible only for the
//! set being closed and for the exact string rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a link-bearing entity's referenced data array is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    /// The array's semantic regions are addressed via explicit tag metadata.
    Tagged,
    /// The entire array is the represented content.
    Untagged,
    /// The array is addressed by position/index mapping.
    Indexed,
}

impl LinkType {
    /// The bare variant name, without the `LinkType::` prefix.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Tagged => "Tagged",
            LinkType::Untagged => "Untagged",
            LinkType::Indexed => "Indexed",
        }
    }
}

impl fmt::Display for LinkType {
    /// Renders exactly `LinkType::Tagged`, `LinkType::Untagged` or
    /// `LinkType::Indexed`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkType::{}", self.as_str())
    }
}

/// Error returned when parsing a string that names no link type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link type: {0}")]
pub struct ParseLinkTypeError(pub String);

impl FromStr for LinkType {
    type Err = ParseLinkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tagged" => Ok(LinkType::Tagged),
            "Untagged" => Ok(LinkType::Untagged),
            "Indexed" => Ok(LinkType::Indexed),
            other => Err(ParseLinkTypeError(other.to_string())),
        }
    }
}
