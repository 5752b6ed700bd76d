//! Query execution over the entity store.
//!
//! Provides:
//! - `QueryExecutor`: the five fetch modes over an explicit predicate list
//! - `MemberQuery`: fluent builder with where clauses, ordering and paging
//! - `QueryFactory`: entry point for fluent and string queries

mod builder;
mod executor;
mod factory;
mod order;

pub use builder::MemberQuery;
pub use executor::{QueryExecutor, QueryResults};
pub use factory::QueryFactory;
pub use order::{Direction, OrderSpecifier, SortField};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
