//! Fetch modes over a conjunctive predicate list.

use serde::Serialize;

use crate::entity::Member;
use crate::error::QueryError;
use crate::predicate::{matches_all, Predicate};
use crate::store::EntityStore;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A page of results together with the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResults<'a> {
    /// Matches inside the requested page, in result order
    pub results: Vec<&'a Member>,
    /// Number of matches before pagination
    pub total: usize,
    /// Offset the page starts at
    pub offset: usize,
    /// Requested page size (`None` = unbounded)
    pub limit: Option<usize>,
}

impl<'a> QueryResults<'a> {
    /// Returns true when the page holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns true when matches exist past the end of this page.
    pub fn has_more(&self) -> bool {
        self.offset + self.results.len() < self.total
    }

    /// Consumes the page and returns its results.
    pub fn into_results(self) -> Vec<&'a Member> {
        self.results
    }
}

/// Stateless executor evaluating predicate lists against a store.
///
/// Results are always in insertion order. All predicates in a list must
/// hold for a member to match; an empty list matches every member.
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor<'a> {
    store: &'a EntityStore,
}

impl<'a> QueryExecutor<'a> {
    /// Creates an executor reading from `store`.
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    fn filtered<'p>(&self, predicates: &'p [Predicate]) -> impl Iterator<Item = &'a Member> + 'p
    where
        'a: 'p,
    {
        self.store
            .all_members()
            .iter()
            .filter(move |m| matches_all(predicates, m))
    }

    /// Returns every matching member.
    pub fn fetch(&self, predicates: &[Predicate]) -> Vec<&'a Member> {
        let results: Vec<&'a Member> = self.filtered(predicates).collect();
        tracing::debug!("fetch matched {} members", results.len());
        results
    }

    /// Returns the single matching member.
    ///
    /// # Errors
    /// `QueryError::NonUniqueResult` unless exactly one member matches.
    pub fn fetch_one(&self, predicates: &[Predicate]) -> Result<&'a Member, QueryError> {
        let matches = self.fetch(predicates);
        exactly_one(matches)
    }

    /// Returns the first matching member in insertion order.
    ///
    /// # Errors
    /// `QueryError::NoResult` if nothing matches.
    pub fn fetch_first(&self, predicates: &[Predicate]) -> Result<&'a Member, QueryError> {
        let first = self.filtered(predicates).next();
        tracing::debug!("fetch_first found match: {}", first.is_some());
        first.ok_or(QueryError::NoResult)
    }

    /// Counts matching members.
    pub fn fetch_count(&self, predicates: &[Predicate]) -> usize {
        let count = self.filtered(predicates).count();
        tracing::debug!("fetch_count matched {} members", count);
        count
    }

    /// Returns one page of matches plus the total match count.
    ///
    /// # Arguments
    /// * `predicates` - Conditions that must all hold
    /// * `offset` - Number of matches to skip (default: 0)
    /// * `limit` - Maximum page size (default: unbounded)
    pub fn fetch_results(
        &self,
        predicates: &[Predicate],
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> QueryResults<'a> {
        paginate(self.fetch(predicates), offset, limit)
    }

    /// Parallel form of [`fetch`](Self::fetch); result order is unchanged.
    #[cfg(feature = "parallel")]
    pub fn par_fetch(&self, predicates: &[Predicate]) -> Vec<&'a Member> {
        self.store
            .all_members()
            .par_iter()
            .filter(|m| matches_all(predicates, m))
            .collect()
    }

    /// Parallel form of [`fetch_count`](Self::fetch_count).
    #[cfg(feature = "parallel")]
    pub fn par_fetch_count(&self, predicates: &[Predicate]) -> usize {
        self.store
            .all_members()
            .par_iter()
            .filter(|m| matches_all(predicates, m))
            .count()
    }
}

pub(crate) fn exactly_one(matches: Vec<&Member>) -> Result<&Member, QueryError> {
    match matches.as_slice() {
        [only] => Ok(*only),
        _ => {
            tracing::debug!("fetch_one matched {} members", matches.len());
            Err(QueryError::NonUniqueResult {
                count: matches.len(),
            })
        }
    }
}

/// Cuts one page out of an ordered match list.
pub(crate) fn paginate<'a>(
    matches: Vec<&'a Member>,
    offset: Option<usize>,
    limit: Option<usize>,
) -> QueryResults<'a> {
    let total = matches.len();
    let offset = offset.unwrap_or(0);
    let results: Vec<&'a Member> = matches
        .into_iter()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    tracing::debug!(
        "fetch_results returned {} of {} members (offset {}, limit {:?})",
        results.len(),
        total,
        offset,
        limit
    );

    QueryResults {
        results,
        total,
        offset,
        limit,
    }
}
