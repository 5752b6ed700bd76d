//! Parameter binding and execution of parsed string queries.

use std::collections::HashMap;

use crate::entity::{Member, MemberId, TeamId};
use crate::error::QueryError;
use crate::predicate::{
    IdCondition, NumberCondition, Predicate, StringCondition, TeamCondition,
};
use crate::query::MemberQuery;
use crate::store::EntityStore;

use super::parser::{parse, Condition, Field, Operand, ParsedQuery};
use super::tokens::CompareOp;

/// Value bound to a named query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Team(TeamId),
    Member(MemberId),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<TeamId> for ParamValue {
    fn from(value: TeamId) -> Self {
        ParamValue::Team(value)
    }
}

impl From<MemberId> for ParamValue {
    fn from(value: MemberId) -> Self {
        ParamValue::Member(value)
    }
}

/// Parsed member query with its parameter bindings and paging.
///
/// ```
/// use in_mem_query_core::EntityStore;
///
/// let mut store = EntityStore::new();
/// let team = store.insert_team("teamA").unwrap();
/// store.insert_member("member1", 10, team).unwrap();
///
/// let found = store
///     .query_factory()
///     .create_query("select m from Member m where m.username = :username")
///     .unwrap()
///     .set_parameter("username", "member1")
///     .unwrap()
///     .get_single_result()
///     .unwrap();
/// assert_eq!(found.username, "member1");
/// ```
#[derive(Debug, Clone)]
pub struct TypedQuery<'a> {
    store: &'a EntityStore,
    ql: String,
    parsed: ParsedQuery,
    params: HashMap<String, ParamValue>,
    first_result: Option<usize>,
    max_results: Option<usize>,
}

impl<'a> TypedQuery<'a> {
    pub(crate) fn parse(store: &'a EntityStore, ql: &str) -> Result<Self, QueryError> {
        let parsed = parse(ql)?;
        tracing::debug!(
            "Parsed query '{}' (alias {}, {} conditions, {} order terms)",
            ql,
            parsed.alias,
            parsed.conditions.len(),
            parsed.order.len()
        );
        Ok(Self {
            store,
            ql: ql.to_string(),
            parsed,
            params: HashMap::new(),
            first_result: None,
            max_results: None,
        })
    }

    /// Returns the query string this query was parsed from.
    pub fn query_string(&self) -> &str {
        &self.ql
    }

    /// Names of the query's `:params`, in order of first appearance.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parsed.parameter_names()
    }

    /// Binds a named parameter, replacing any earlier binding.
    ///
    /// # Errors
    /// `QueryError::UnknownParameter` if the query has no such parameter.
    pub fn set_parameter(
        mut self,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<Self, QueryError> {
        if !self.parsed.parameter_names().contains(&name) {
            return Err(QueryError::UnknownParameter(name.to_string()));
        }
        self.params.insert(name.to_string(), value.into());
        Ok(self)
    }

    /// Skips the first `first` results.
    pub fn set_first_result(mut self, first: usize) -> Self {
        self.first_result = Some(first);
        self
    }

    /// Caps the number of results.
    pub fn set_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Returns every member on the requested page.
    pub fn get_result_list(&self) -> Result<Vec<&'a Member>, QueryError> {
        Ok(self.to_member_query()?.fetch())
    }

    /// Returns the single member on the requested page.
    ///
    /// # Errors
    /// `QueryError::NonUniqueResult` unless exactly one member is returned.
    pub fn get_single_result(&self) -> Result<&'a Member, QueryError> {
        self.to_member_query()?.fetch_one()
    }

    /// Counts all matches, ignoring paging.
    pub fn get_result_count(&self) -> Result<usize, QueryError> {
        Ok(self.to_member_query()?.fetch_count())
    }

    /// Lowers the parsed query and bindings onto a fluent query.
    fn to_member_query(&self) -> Result<MemberQuery<'a>, QueryError> {
        tracing::debug!("Executing query '{}'", self.ql);

        let predicates = self
            .parsed
            .conditions
            .iter()
            .zip(&self.parsed.positions)
            .map(|(c, &position)| self.lower(c, position))
            .collect::<Result<Vec<_>, _>>()?;

        let mut query = self
            .store
            .select_from_member()
            .where_clause(predicates)
            .order_by(self.parsed.order.iter().copied());
        if let Some(first) = self.first_result {
            query = query.offset(first);
        }
        if let Some(max) = self.max_results {
            query = query.limit(max);
        }
        Ok(query)
    }

    fn lower(&self, condition: &Condition, position: usize) -> Result<Predicate, QueryError> {
        let unsupported = |field: Field| {
            QueryError::parse(
                position,
                format!("operator is not supported on {}", field.name()),
            )
        };
        let predicate = match condition {
            Condition::Compare { field, op, operand } => match field {
                Field::Username => {
                    let value = self.string_value(operand)?;
                    match op {
                        CompareOp::Eq => Predicate::Username(StringCondition::Eq(value)),
                        CompareOp::Ne => Predicate::Username(StringCondition::Ne(value)),
                        _ => return Err(unsupported(*field)),
                    }
                }
                Field::Age => {
                    let value = self.age_value(operand)?;
                    Predicate::Age(match op {
                        CompareOp::Eq => NumberCondition::Eq(value),
                        CompareOp::Ne => NumberCondition::Ne(value),
                        CompareOp::Gt => NumberCondition::Gt(value),
                        CompareOp::Goe => NumberCondition::Goe(value),
                        CompareOp::Lt => NumberCondition::Lt(value),
                        CompareOp::Loe => NumberCondition::Loe(value),
                    })
                }
                Field::Team => {
                    let value = self.team_value(operand)?;
                    match op {
                        CompareOp::Eq => Predicate::Team(TeamCondition::Eq(value)),
                        CompareOp::Ne => Predicate::Team(TeamCondition::Ne(value)),
                        _ => return Err(unsupported(*field)),
                    }
                }
                Field::Id => match op {
                    CompareOp::Eq => Predicate::Id(IdCondition::Eq(self.member_value(operand)?)),
                    _ => return Err(unsupported(*field)),
                },
            },
            Condition::Like {
                field: Field::Username,
                negated,
                pattern,
            } => negate(
                Predicate::Username(StringCondition::Like(self.string_value(pattern)?)),
                *negated,
            ),
            Condition::Between {
                field: Field::Age,
                lo,
                hi,
            } => Predicate::Age(NumberCondition::Between(
                self.age_value(lo)?,
                self.age_value(hi)?,
            )),
            Condition::In {
                field,
                negated,
                values,
            } => match field {
                Field::Username => {
                    let values = values
                        .iter()
                        .map(|v| self.string_value(v))
                        .collect::<Result<Vec<_>, _>>()?;
                    Predicate::Username(if *negated {
                        StringCondition::NotIn(values)
                    } else {
                        StringCondition::In(values)
                    })
                }
                Field::Age => {
                    let values = values
                        .iter()
                        .map(|v| self.age_value(v))
                        .collect::<Result<Vec<_>, _>>()?;
                    Predicate::Age(if *negated {
                        NumberCondition::NotIn(values)
                    } else {
                        NumberCondition::In(values)
                    })
                }
                Field::Id if !*negated => Predicate::Id(IdCondition::In(
                    values
                        .iter()
                        .map(|v| self.member_value(v))
                        .collect::<Result<Vec<_>, _>>()?,
                )),
                _ => return Err(unsupported(*field)),
            },
            Condition::Null { field, negated } => match field {
                Field::Username => Predicate::Username(if *negated {
                    StringCondition::IsNotNull
                } else {
                    StringCondition::IsNull
                }),
                Field::Team => Predicate::Team(if *negated {
                    TeamCondition::IsNotNull
                } else {
                    TeamCondition::IsNull
                }),
                Field::Age => negate(Predicate::Age(NumberCondition::IsNotNull), !*negated),
                Field::Id => return Err(unsupported(*field)),
            },
            Condition::Like { field, .. } | Condition::Between { field, .. } => {
                return Err(unsupported(*field))
            }
        };
        Ok(predicate)
    }

    /// Resolves an operand to a value and a label for error messages.
    fn resolve(&self, operand: &Operand) -> Result<(ParamValue, String), QueryError> {
        match operand {
            Operand::Param(name) => self
                .params
                .get(name)
                .map(|v| (v.clone(), name.clone()))
                .ok_or_else(|| QueryError::MissingParameter(name.clone())),
            Operand::Str(text) => Ok((ParamValue::Str(text.clone()), format!("'{}'", text))),
            Operand::Int(n) => Ok((ParamValue::Int(*n), n.to_string())),
        }
    }

    fn string_value(&self, operand: &Operand) -> Result<String, QueryError> {
        match self.resolve(operand)? {
            (ParamValue::Str(s), _) => Ok(s),
            (_, parameter) => Err(QueryError::ParameterType {
                parameter,
                expected: "a string",
            }),
        }
    }

    fn age_value(&self, operand: &Operand) -> Result<i32, QueryError> {
        match self.resolve(operand)? {
            (ParamValue::Int(n), parameter) => {
                i32::try_from(n).map_err(|_| QueryError::ParameterType {
                    parameter,
                    expected: "an integer in i32 range",
                })
            }
            (_, parameter) => Err(QueryError::ParameterType {
                parameter,
                expected: "an integer",
            }),
        }
    }

    fn team_value(&self, operand: &Operand) -> Result<TeamId, QueryError> {
        match self.resolve(operand)? {
            (ParamValue::Team(id), _) => Ok(id),
            (ParamValue::Int(n), _) if n >= 0 => Ok(TeamId(n as u64)),
            (_, parameter) => Err(QueryError::ParameterType {
                parameter,
                expected: "a team id",
            }),
        }
    }

    fn member_value(&self, operand: &Operand) -> Result<MemberId, QueryError> {
        match self.resolve(operand)? {
            (ParamValue::Member(id), _) => Ok(id),
            (ParamValue::Int(n), _) if n >= 0 => Ok(MemberId(n as u64)),
            (_, parameter) => Err(QueryError::ParameterType {
                parameter,
                expected: "a member id",
            }),
        }
    }
}

fn negate(predicate: Predicate, negated: bool) -> Predicate {
    if negated {
        predicate.not()
    } else {
        predicate
    }
}
