//! Result ordering.

use std::cmp::Ordering;

use crate::entity::Member;

/// Member field a result set can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Username,
    Age,
    /// Team identity; unassigned members sort last
    Team,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// One `order by` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpecifier {
    pub field: SortField,
    pub direction: Direction,
}

impl OrderSpecifier {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }

    fn compare(&self, a: &Member, b: &Member) -> Ordering {
        let ordering = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Username => a.username.cmp(&b.username),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Team => match (a.team, b.team) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Sorts members by the given terms, earlier terms taking precedence.
///
/// The sort is stable, so members that compare equal on every term keep
/// their insertion order.
pub(crate) fn sort_members(members: &mut [&Member], order: &[OrderSpecifier]) {
    if order.is_empty() {
        return;
    }
    members.sort_by(|a, b| {
        order
            .iter()
            .map(|spec| spec.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}
