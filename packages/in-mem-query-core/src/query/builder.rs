//! Fluent member query builder.

use crate::entity::Member;
use crate::error::QueryError;
use crate::predicate::Predicate;
use crate::store::EntityStore;

use super::executor::{exactly_one, paginate, QueryExecutor, QueryResults};
use super::order::{sort_members, OrderSpecifier};

/// `select member from Member member where ... order by ...`
///
/// Built with [`EntityStore::select_from_member`] or
/// [`QueryFactory::select_from_member`](super::QueryFactory::select_from_member):
///
/// ```
/// use in_mem_query_core::{member, EntityStore};
///
/// let mut store = EntityStore::new();
/// let team = store.insert_team("teamA").unwrap();
/// store.insert_member("member1", 10, team).unwrap();
///
/// let found = store
///     .select_from_member()
///     .where_clause([member::username().eq("member1"), member::age().eq(10)])
///     .fetch_one()
///     .unwrap();
/// assert_eq!(found.age, 10);
/// ```
#[derive(Debug, Clone)]
pub struct MemberQuery<'a> {
    executor: QueryExecutor<'a>,
    predicates: Vec<Predicate>,
    order: Vec<OrderSpecifier>,
    offset: Option<usize>,
    limit: Option<usize>,
}

impl<'a> MemberQuery<'a> {
    pub(crate) fn new(store: &'a EntityStore) -> Self {
        Self {
            executor: QueryExecutor::new(store),
            predicates: Vec::new(),
            order: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    /// Adds conditions to the where clause. All conditions, including those
    /// from earlier calls, must hold.
    pub fn where_clause(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    /// Appends sort terms. Earlier terms take precedence.
    pub fn order_by(mut self, order: impl IntoIterator<Item = OrderSpecifier>) -> Self {
        self.order.extend(order);
        self
    }

    /// Skips the first `offset` results.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Caps the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the accumulated where clause.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Filtered and ordered matches, before paging.
    fn ordered(&self) -> Vec<&'a Member> {
        let mut matches = self.executor.fetch(&self.predicates);
        sort_members(&mut matches, &self.order);
        matches
    }

    /// Returns the requested page of matches.
    pub fn fetch(&self) -> Vec<&'a Member> {
        if self.order.is_empty() && self.offset.is_none() && self.limit.is_none() {
            return self.executor.fetch(&self.predicates);
        }
        self.fetch_results().into_results()
    }

    /// Returns the single member on the requested page.
    ///
    /// # Errors
    /// `QueryError::NonUniqueResult` unless exactly one member is returned.
    pub fn fetch_one(&self) -> Result<&'a Member, QueryError> {
        exactly_one(self.fetch())
    }

    /// Returns the first member on the requested page (`limit 1`).
    ///
    /// # Errors
    /// `QueryError::NoResult` if the page is empty.
    pub fn fetch_first(&self) -> Result<&'a Member, QueryError> {
        if self.order.is_empty() && self.offset.is_none() && self.limit != Some(0) {
            return self.executor.fetch_first(&self.predicates);
        }
        self.clone()
            .limit(1.min(self.limit.unwrap_or(1)))
            .fetch()
            .into_iter()
            .next()
            .ok_or(QueryError::NoResult)
    }

    /// Counts all matches, ignoring offset and limit.
    pub fn fetch_count(&self) -> usize {
        self.executor.fetch_count(&self.predicates)
    }

    /// Returns the requested page together with the unpaginated match count.
    pub fn fetch_results(&self) -> QueryResults<'a> {
        paginate(self.ordered(), self.offset, self.limit)
    }
}
