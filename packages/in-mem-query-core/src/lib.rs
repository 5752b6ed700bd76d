//! In-memory member/team store with a type-checked query builder.
//!
//! Provides an entity store with referential integrity, composable member
//! predicates, five fetch modes (all, one, first, count, paginated) and a
//! JPQL-like string query front end that lowers onto the same predicates.

pub mod config;
pub mod entity;
pub mod error;
pub mod jpql;
pub mod predicate;
pub mod query;
pub mod store;

pub use config::StoreConfig;
pub use entity::{Member, MemberId, Team, TeamId};
pub use error::QueryError;
pub use predicate::{member, Predicate};
pub use query::{MemberQuery, QueryExecutor, QueryFactory, QueryResults};
pub use store::EntityStore;
