//! Team record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team identity, assigned by the store starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team record. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Store-assigned identity
    pub id: TeamId,
    /// Team name
    pub name: String,
}

impl Team {
    pub(crate) fn new(id: TeamId, name: String) -> Self {
        Self { id, name }
    }
}
