//! Per-field comparison operators.

use crate::entity::{MemberId, TeamId};

use super::like;

/// Comparison on a string field.
///
/// Evaluated against `Option<&str>` so null checks have a meaning; stored
/// members always carry a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringCondition {
    Eq(String),
    Ne(String),
    In(Vec<String>),
    NotIn(Vec<String>),
    Contains(String),
    StartsWith(String),
    EndsWith(String),
    /// SQL pattern with `%` and `_` wildcards
    Like(String),
    IsNull,
    IsNotNull,
}

impl StringCondition {
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            // SQL semantics: every comparison against null is unknown
            return matches!(self, StringCondition::IsNull);
        };
        match self {
            StringCondition::Eq(expected) => value == expected,
            StringCondition::Ne(expected) => value != expected,
            StringCondition::In(set) => set.iter().any(|s| s == value),
            StringCondition::NotIn(set) => set.iter().all(|s| s != value),
            StringCondition::Contains(needle) => value.contains(needle.as_str()),
            StringCondition::StartsWith(prefix) => value.starts_with(prefix.as_str()),
            StringCondition::EndsWith(suffix) => value.ends_with(suffix.as_str()),
            StringCondition::Like(pattern) => like::matches(pattern, value),
            StringCondition::IsNull => false,
            StringCondition::IsNotNull => true,
        }
    }
}

/// Comparison on an integer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberCondition {
    Eq(i32),
    Ne(i32),
    Goe(i32),
    Gt(i32),
    Loe(i32),
    Lt(i32),
    /// Inclusive on both ends; `lo > hi` matches nothing
    Between(i32, i32),
    In(Vec<i32>),
    NotIn(Vec<i32>),
    IsNotNull,
}

impl NumberCondition {
    pub fn matches(&self, value: i32) -> bool {
        match self {
            NumberCondition::Eq(n) => value == *n,
            NumberCondition::Ne(n) => value != *n,
            NumberCondition::Goe(n) => value >= *n,
            NumberCondition::Gt(n) => value > *n,
            NumberCondition::Loe(n) => value <= *n,
            NumberCondition::Lt(n) => value < *n,
            NumberCondition::Between(lo, hi) => *lo <= value && value <= *hi,
            NumberCondition::In(set) => set.contains(&value),
            NumberCondition::NotIn(set) => !set.contains(&value),
            NumberCondition::IsNotNull => true,
        }
    }
}

/// Comparison on the team reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamCondition {
    Eq(TeamId),
    Ne(TeamId),
    IsNull,
    IsNotNull,
}

impl TeamCondition {
    pub fn matches(&self, value: Option<TeamId>) -> bool {
        match (self, value) {
            (TeamCondition::IsNull, team) => team.is_none(),
            (TeamCondition::IsNotNull, team) => team.is_some(),
            // Unassigned members never satisfy a value comparison
            (_, None) => false,
            (TeamCondition::Eq(id), Some(team)) => team == *id,
            (TeamCondition::Ne(id), Some(team)) => team != *id,
        }
    }
}

/// Comparison on the member identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdCondition {
    Eq(MemberId),
    In(Vec<MemberId>),
}

impl IdCondition {
    pub fn matches(&self, value: MemberId) -> bool {
        match self {
            IdCondition::Eq(id) => value == *id,
            IdCondition::In(set) => set.contains(&value),
        }
    }
}
