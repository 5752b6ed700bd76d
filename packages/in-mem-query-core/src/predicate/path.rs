//! Typed field paths that build predicates and sort orders.

use crate::entity::{MemberId, TeamId};
use crate::query::{OrderSpecifier, SortField};

use super::condition::{IdCondition, NumberCondition, StringCondition, TeamCondition};
use super::Predicate;

/// Path to the member `username` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringPath;

impl StringPath {
    /// `username = value`
    pub fn eq(self, value: impl Into<String>) -> Predicate {
        Predicate::Username(StringCondition::Eq(value.into()))
    }

    /// `username <> value`
    pub fn ne(self, value: impl Into<String>) -> Predicate {
        Predicate::Username(StringCondition::Ne(value.into()))
    }

    /// `username in (values)`
    pub fn is_in<S: Into<String>>(self, values: impl IntoIterator<Item = S>) -> Predicate {
        Predicate::Username(StringCondition::In(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// `username not in (values)`
    pub fn not_in<S: Into<String>>(self, values: impl IntoIterator<Item = S>) -> Predicate {
        Predicate::Username(StringCondition::NotIn(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// `username like '%needle%'`
    pub fn contains(self, needle: impl Into<String>) -> Predicate {
        Predicate::Username(StringCondition::Contains(needle.into()))
    }

    /// `username like 'prefix%'`
    pub fn starts_with(self, prefix: impl Into<String>) -> Predicate {
        Predicate::Username(StringCondition::StartsWith(prefix.into()))
    }

    /// `username like '%suffix'`
    pub fn ends_with(self, suffix: impl Into<String>) -> Predicate {
        Predicate::Username(StringCondition::EndsWith(suffix.into()))
    }

    /// `username like pattern`, with `%` and `_` wildcards
    pub fn like(self, pattern: impl Into<String>) -> Predicate {
        Predicate::Username(StringCondition::Like(pattern.into()))
    }

    pub fn is_null(self) -> Predicate {
        Predicate::Username(StringCondition::IsNull)
    }

    pub fn is_not_null(self) -> Predicate {
        Predicate::Username(StringCondition::IsNotNull)
    }

    pub fn asc(self) -> OrderSpecifier {
        OrderSpecifier::asc(SortField::Username)
    }

    pub fn desc(self) -> OrderSpecifier {
        OrderSpecifier::desc(SortField::Username)
    }
}

/// Path to the member `age` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberPath;

impl NumberPath {
    /// `age = value`
    pub fn eq(self, value: i32) -> Predicate {
        Predicate::Age(NumberCondition::Eq(value))
    }

    /// `age <> value`
    pub fn ne(self, value: i32) -> Predicate {
        Predicate::Age(NumberCondition::Ne(value))
    }

    /// `age >= value`
    pub fn goe(self, value: i32) -> Predicate {
        Predicate::Age(NumberCondition::Goe(value))
    }

    /// `age > value`
    pub fn gt(self, value: i32) -> Predicate {
        Predicate::Age(NumberCondition::Gt(value))
    }

    /// `age <= value`
    pub fn loe(self, value: i32) -> Predicate {
        Predicate::Age(NumberCondition::Loe(value))
    }

    /// `age < value`
    pub fn lt(self, value: i32) -> Predicate {
        Predicate::Age(NumberCondition::Lt(value))
    }

    /// `age between lo and hi`, inclusive
    pub fn between(self, lo: i32, hi: i32) -> Predicate {
        Predicate::Age(NumberCondition::Between(lo, hi))
    }

    /// `age in (values)`
    pub fn is_in(self, values: impl IntoIterator<Item = i32>) -> Predicate {
        Predicate::Age(NumberCondition::In(values.into_iter().collect()))
    }

    /// `age not in (values)`
    pub fn not_in(self, values: impl IntoIterator<Item = i32>) -> Predicate {
        Predicate::Age(NumberCondition::NotIn(values.into_iter().collect()))
    }

    pub fn is_not_null(self) -> Predicate {
        Predicate::Age(NumberCondition::IsNotNull)
    }

    pub fn asc(self) -> OrderSpecifier {
        OrderSpecifier::asc(SortField::Age)
    }

    pub fn desc(self) -> OrderSpecifier {
        OrderSpecifier::desc(SortField::Age)
    }
}

/// Path to the member's team reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamPath;

impl TeamPath {
    pub fn eq(self, team: TeamId) -> Predicate {
        Predicate::Team(TeamCondition::Eq(team))
    }

    pub fn ne(self, team: TeamId) -> Predicate {
        Predicate::Team(TeamCondition::Ne(team))
    }

    pub fn is_null(self) -> Predicate {
        Predicate::Team(TeamCondition::IsNull)
    }

    pub fn is_not_null(self) -> Predicate {
        Predicate::Team(TeamCondition::IsNotNull)
    }

    pub fn asc(self) -> OrderSpecifier {
        OrderSpecifier::asc(SortField::Team)
    }

    pub fn desc(self) -> OrderSpecifier {
        OrderSpecifier::desc(SortField::Team)
    }
}

/// Path to the member identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdPath;

impl IdPath {
    pub fn eq(self, id: MemberId) -> Predicate {
        Predicate::Id(IdCondition::Eq(id))
    }

    pub fn is_in(self, ids: impl IntoIterator<Item = MemberId>) -> Predicate {
        Predicate::Id(IdCondition::In(ids.into_iter().collect()))
    }

    pub fn asc(self) -> OrderSpecifier {
        OrderSpecifier::asc(SortField::Id)
    }

    pub fn desc(self) -> OrderSpecifier {
        OrderSpecifier::desc(SortField::Id)
    }
}
