//! Composable conditions over member fields.
//!
//! Predicates are plain values built from typed field paths
//! (`member::username().eq("member1")`) and evaluated with
//! [`Predicate::matches`]. A where clause is an ordered list of predicates
//! that must all hold.

mod condition;
mod like;
pub mod member;
mod path;

pub use condition::{IdCondition, NumberCondition, StringCondition, TeamCondition};
pub use path::{IdPath, NumberPath, StringPath, TeamPath};

use crate::entity::Member;

/// Boolean condition evaluated against one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Condition on `username`
    Username(StringCondition),
    /// Condition on `age`
    Age(NumberCondition),
    /// Condition on the team reference
    Team(TeamCondition),
    /// Condition on the member identity
    Id(IdCondition),
    /// All inner predicates hold (empty list holds)
    And(Vec<Predicate>),
    /// At least one inner predicate holds (empty list does not hold)
    Or(Vec<Predicate>),
    /// Inner predicate does not hold
    Not(Box<Predicate>),
}

impl Predicate {
    /// Evaluates the predicate against a member.
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            Predicate::Username(cond) => cond.matches(Some(member.username.as_str())),
            Predicate::Age(cond) => cond.matches(member.age),
            Predicate::Team(cond) => cond.matches(member.team),
            Predicate::Id(cond) => cond.matches(member.id),
            Predicate::And(inner) => inner.iter().all(|p| p.matches(member)),
            Predicate::Or(inner) => inner.iter().any(|p| p.matches(member)),
            Predicate::Not(inner) => !inner.matches(member),
        }
    }

    /// Conjunction with another predicate.
    ///
    /// Chained `and` calls flatten into a single `And` node.
    pub fn and(self, other: Predicate) -> Predicate {
        match self {
            Predicate::And(mut inner) => {
                inner.push(other);
                Predicate::And(inner)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Disjunction with another predicate.
    pub fn or(self, other: Predicate) -> Predicate {
        match self {
            Predicate::Or(mut inner) => {
                inner.push(other);
                Predicate::Or(inner)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    /// Negation. `p.not().not()` unwraps back to `p`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        match self {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }
}

/// Returns true when every predicate in the list holds.
pub fn matches_all(predicates: &[Predicate], member: &Member) -> bool {
    predicates.iter().all(|p| p.matches(member))
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
