//! Query entry point bound to a store.

use crate::error::QueryError;
use crate::jpql::TypedQuery;
use crate::store::EntityStore;

use super::builder::MemberQuery;
use super::executor::QueryExecutor;

/// Creates fluent and string queries against one store.
#[derive(Debug, Clone, Copy)]
pub struct QueryFactory<'a> {
    store: &'a EntityStore,
}

impl<'a> QueryFactory<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Starts a fluent query over members.
    pub fn select_from_member(&self) -> MemberQuery<'a> {
        MemberQuery::new(self.store)
    }

    /// Returns an executor for explicit predicate lists.
    pub fn executor(&self) -> QueryExecutor<'a> {
        QueryExecutor::new(self.store)
    }

    /// Parses a string query such as
    /// `select m from Member m where m.username = :username`.
    ///
    /// # Errors
    /// `QueryError::Parse` or `QueryError::UnknownField` if the string is not
    /// a valid member query.
    pub fn create_query(&self, ql: &str) -> Result<TypedQuery<'a>, QueryError> {
        TypedQuery::parse(self.store, ql)
    }
}
