//! Group identifiers.
//!
//! The text form of a [`GroupId`] is the property key a group is stored under, so
//! `Display` and `FromStr` must stay inverse of each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::GroupError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a property key. Accepts every textual layout `uuid` understands
    /// (hyphenated, simple, braced, urn).
    pub fn parse(key: &str) -> Result<Self, GroupError> {
        Uuid::parse_str(key)
            .map(Self)
            .map_err(|_| GroupError::InvalidIdentifier {
                key: key.to_string(),
            })
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GroupId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for GroupId {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
