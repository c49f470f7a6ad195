//! Catalog item identifiers
//!
//! IDs are supplied by the operator (e.g. `B1`, `mag-2024-03`). They are
//! trimmed on creation, keep their original spelling for display, and compare
//! case-insensitively: `B1` and `b1` name the same item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid item ID: must not be empty")]
    Empty,
}

/// Operator-supplied identifier of a catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId {
    /// The ID as entered
    raw: String,
    /// Lowercased form used for comparisons
    key: String,
}

impl ItemId {
    /// Creates an ID, rejecting empty or whitespace-only input
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IdError> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(IdError::Empty);
        }

        Ok(Self {
            raw: raw.to_string(),
            key: normalize(raw),
        })
    }

    /// Returns the ID as originally entered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if `candidate` names this ID, ignoring case
    ///
    /// The candidate is compared as given; only creation trims.
    pub fn matches(&self, candidate: &str) -> bool {
        self.key == normalize(candidate)
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase()
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.raw
    }
}
