//! Integration test suite.
//!
//! 1. Basic query scenarios over the teamA/teamB fixture
//! 2. String and fluent query equivalence
//! 3. Fetch-mode properties over randomized stores

pub mod basic_query_tests;
pub mod equivalence_tests;
pub mod helpers;
pub mod property_tests;
