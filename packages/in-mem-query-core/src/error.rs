//! Query store error types.

use thiserror::Error;

use crate::entity::TeamId;

/// Store and query errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Insertion referenced a team that is not in the store
    #[error("Team {team} not found")]
    UnknownTeam { team: TeamId },

    /// A single-result fetch matched zero or several records
    #[error("Expected exactly one result, query matched {count}")]
    NonUniqueResult { count: usize },

    /// A first-result fetch matched nothing
    #[error("Query returned no result")]
    NoResult,

    /// Entity limit from the store configuration reached
    #[error("Capacity exceeded for {entity}: limit {limit}")]
    CapacityExceeded { entity: &'static str, limit: usize },

    /// Malformed query string
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Query string referenced an alias or field that does not exist
    #[error("Unknown field '{field}' on alias '{alias}'")]
    UnknownField { alias: String, field: String },

    /// Named parameter was never bound
    #[error("Parameter ':{0}' is not bound")]
    MissingParameter(String),

    /// Bound a parameter name the query does not use
    #[error("Query has no parameter ':{0}'")]
    UnknownParameter(String),

    /// Bound parameter does not fit the field it is compared with
    #[error("Parameter ':{parameter}' must be {expected}")]
    ParameterType {
        parameter: String,
        expected: &'static str,
    },
}

impl QueryError {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}
