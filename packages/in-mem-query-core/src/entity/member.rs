//! Member record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Member identity, assigned by the store starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Member record.
///
/// The team reference is non-owning: the store guarantees it names a team
/// that was inserted earlier, but the member does not keep the team alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Store-assigned identity
    pub id: MemberId,
    /// Login name, not necessarily unique
    pub username: String,
    /// Age in years
    pub age: i32,
    /// Owning team, if assigned
    pub team: Option<TeamId>,
}

impl Member {
    pub(crate) fn new(id: MemberId, username: String, age: i32, team: Option<TeamId>) -> Self {
        Self {
            id,
            username,
            age,
            team,
        }
    }
}
