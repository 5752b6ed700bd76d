//! Field paths of the `Member` record.
//!
//! ```
//! use in_mem_query_core::member;
//!
//! let adult_member1 = member::username().eq("member1").and(member::age().goe(18));
//! # let _ = adult_member1;
//! ```

use super::path::{IdPath, NumberPath, StringPath, TeamPath};

/// `member.id`
pub fn id() -> IdPath {
    IdPath
}

/// `member.username`
pub fn username() -> StringPath {
    StringPath
}

/// `member.age`
pub fn age() -> NumberPath {
    NumberPath
}

/// `member.team`
pub fn team() -> TeamPath {
    TeamPath
}
