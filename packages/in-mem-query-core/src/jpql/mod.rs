//! String queries over members.
//!
//! Accepts a small JPQL-like language:
//!
//! ```text
//! select m from Member m
//! where m.username = :username and m.age between 10 and 30
//! order by m.age desc
//! ```
//!
//! Queries are parsed once into conditions on typed fields, then lowered onto
//! the same [`Predicate`](crate::predicate::Predicate) values the fluent
//! builder uses, so both surfaces return identical results.

mod parser;
mod tokens;
mod typed_query;

pub use typed_query::{ParamValue, TypedQuery};
