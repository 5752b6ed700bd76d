//! Recursive-descent parser producing a [`ParsedQuery`].

use crate::error::QueryError;
use crate::query::{OrderSpecifier, SortField};

use super::tokens::{tokenize, CompareOp, Token, TokenKind};

/// Entity name accepted after `from`.
const MEMBER_ENTITY: &str = "Member";

/// Member field addressed by a path such as `m.age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Username,
    Age,
    Team,
}

impl Field {
    fn sort_field(self) -> SortField {
        match self {
            Field::Id => SortField::Id,
            Field::Username => SortField::Username,
            Field::Age => SortField::Age,
            Field::Team => SortField::Team,
        }
    }

    pub(super) fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Username => "username",
            Field::Age => "age",
            Field::Team => "team",
        }
    }
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Param(String),
    Str(String),
    Int(i64),
}

/// One conjunct of the where clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Compare {
        field: Field,
        op: CompareOp,
        operand: Operand,
    },
    Like {
        field: Field,
        negated: bool,
        pattern: Operand,
    },
    Between {
        field: Field,
        lo: Operand,
        hi: Operand,
    },
    In {
        field: Field,
        negated: bool,
        values: Vec<Operand>,
    },
    Null {
        field: Field,
        negated: bool,
    },
}

/// Parsed `select ... from Member ...` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Range variable, e.g. `m`
    pub alias: String,
    /// Conditions joined by `and`
    pub conditions: Vec<Condition>,
    /// Byte position where each condition starts, parallel to `conditions`
    pub positions: Vec<usize>,
    pub order: Vec<OrderSpecifier>,
}

impl Condition {
    fn operands(&self) -> Vec<&Operand> {
        match self {
            Condition::Compare { operand, .. } => vec![operand],
            Condition::Like { pattern, .. } => vec![pattern],
            Condition::Between { lo, hi, .. } => vec![lo, hi],
            Condition::In { values, .. } => values.iter().collect(),
            Condition::Null { .. } => Vec::new(),
        }
    }
}

impl ParsedQuery {
    /// Names of every `:param` in order of first appearance.
    pub fn parameter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for operand in self.conditions.iter().flat_map(Condition::operands) {
            if let Operand::Param(name) = operand {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }
}

/// Parses a member query string.
pub fn parse(input: &str) -> Result<ParsedQuery, QueryError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: input.len(),
    };
    parser.query()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Byte length of the input, reported for errors at end of input
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn position(&self) -> usize {
        self.peek().map(|t| t.position).unwrap_or(self.end)
    }

    fn error(&self, message: impl Into<String>) -> QueryError {
        QueryError::parse(self.position(), message)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_keyword(&self, kw: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(kw))
    }

    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.at_keyword(kw) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<(), QueryError> {
        if self.eat_keyword(kw) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", kw)))
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), QueryError> {
        if self.peek().map(|t| &t.kind) == Some(&kind) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected {}", what)))
        }
    }

    fn ident(&mut self, what: &str) -> Result<String, QueryError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.error(format!("expected {}", what))),
        }
    }

    fn query(&mut self) -> Result<ParsedQuery, QueryError> {
        self.expect_keyword("select")?;
        let selected = self.ident("select alias")?;

        self.expect_keyword("from")?;
        let entity_position = self.position();
        let entity = self.ident("entity name")?;
        if entity != MEMBER_ENTITY {
            return Err(QueryError::parse(
                entity_position,
                format!("unknown entity '{}'", entity),
            ));
        }
        self.eat_keyword("as");
        let alias_position = self.position();
        let alias = self.ident("range variable")?;
        if !selected.eq_ignore_ascii_case(&alias) {
            return Err(QueryError::parse(
                alias_position,
                format!("selected '{}' but range variable is '{}'", selected, alias),
            ));
        }

        let mut conditions = Vec::new();
        let mut positions = Vec::new();
        if self.eat_keyword("where") {
            loop {
                positions.push(self.position());
                conditions.push(self.condition(&alias)?);
                if !self.eat_keyword("and") {
                    break;
                }
            }
        }

        let mut order = Vec::new();
        if self.eat_keyword("order") {
            self.expect_keyword("by")?;
            loop {
                let field = self.path(&alias)?;
                let spec = if self.eat_keyword("desc") {
                    OrderSpecifier::desc(field.sort_field())
                } else {
                    self.eat_keyword("asc");
                    OrderSpecifier::asc(field.sort_field())
                };
                order.push(spec);
                if self.peek().map(|t| &t.kind) != Some(&TokenKind::Comma) {
                    break;
                }
                self.pos += 1;
            }
        }

        if self.peek().is_some() {
            return Err(self.error("unexpected trailing input"));
        }

        Ok(ParsedQuery {
            alias,
            conditions,
            positions,
            order,
        })
    }

    /// `alias.field` or `alias.team.id`; the alias matches case-insensitively
    fn path(&mut self, alias: &str) -> Result<Field, QueryError> {
        let used = self.ident("field path")?;
        self.expect(TokenKind::Dot, "'.'")?;
        let name = self.ident("field name")?;
        if !used.eq_ignore_ascii_case(alias) {
            return Err(QueryError::UnknownField {
                alias: used,
                field: name,
            });
        }
        let field = match name.as_str() {
            "id" => Field::Id,
            "username" => Field::Username,
            "age" => Field::Age,
            "team" => {
                if self.peek().map(|t| &t.kind) == Some(&TokenKind::Dot) {
                    self.pos += 1;
                    let sub = self.ident("field name")?;
                    if sub != "id" {
                        return Err(QueryError::UnknownField {
                            alias: used,
                            field: format!("team.{}", sub),
                        });
                    }
                }
                Field::Team
            }
            _ => {
                return Err(QueryError::UnknownField {
                    alias: used,
                    field: name,
                })
            }
        };
        Ok(field)
    }

    fn operand(&mut self) -> Result<Operand, QueryError> {
        let position = self.position();
        match self.advance().map(|t| t.kind) {
            Some(TokenKind::Param(name)) => Ok(Operand::Param(name)),
            Some(TokenKind::Str(text)) => Ok(Operand::Str(text)),
            Some(TokenKind::Int(n)) => Ok(Operand::Int(n)),
            _ => Err(QueryError::parse(
                position,
                "expected parameter or literal",
            )),
        }
    }

    fn condition(&mut self, alias: &str) -> Result<Condition, QueryError> {
        let start = self.position();
        let field = self.path(alias)?;

        let condition = if let Some(TokenKind::Op(op)) = self.peek().map(|t| t.kind.clone()) {
            self.pos += 1;
            Condition::Compare {
                field,
                op,
                operand: self.operand()?,
            }
        } else if self.eat_keyword("is") {
            let negated = self.eat_keyword("not");
            self.expect_keyword("null")?;
            Condition::Null { field, negated }
        } else if self.eat_keyword("between") {
            let lo = self.operand()?;
            self.expect_keyword("and")?;
            let hi = self.operand()?;
            Condition::Between { field, lo, hi }
        } else {
            let negated = self.eat_keyword("not");
            if self.eat_keyword("like") {
                Condition::Like {
                    field,
                    negated,
                    pattern: self.operand()?,
                }
            } else if self.eat_keyword("in") {
                self.expect(TokenKind::LParen, "'('")?;
                let mut values = vec![self.operand()?];
                while self.peek().map(|t| &t.kind) == Some(&TokenKind::Comma) {
                    self.pos += 1;
                    values.push(self.operand()?);
                }
                self.expect(TokenKind::RParen, "')'")?;
                Condition::In {
                    field,
                    negated,
                    values,
                }
            } else {
                return Err(self.error("expected comparison"));
            }
        };

        check_supported(&condition, start)?;
        Ok(condition)
    }
}

/// Rejects operators a field cannot take and literals of the wrong type.
fn check_supported(condition: &Condition, position: usize) -> Result<(), QueryError> {
    let unsupported = |field: Field, what: &str| {
        QueryError::parse(
            position,
            format!("'{}' is not supported on {}", what, field.name()),
        )
    };
    let literal_fits = |field: Field, operand: &Operand| -> Result<(), QueryError> {
        let fits = match (field, operand) {
            (_, Operand::Param(_)) => true,
            (Field::Username, Operand::Str(_)) => true,
            (Field::Age, Operand::Int(n)) => i32::try_from(*n).is_ok(),
            (Field::Id | Field::Team, Operand::Int(n)) => *n >= 0,
            _ => false,
        };
        if fits {
            Ok(())
        } else {
            Err(QueryError::parse(
                position,
                format!("literal does not fit field {}", field.name()),
            ))
        }
    };

    match condition {
        Condition::Compare { field, op, operand } => {
            let ordering = !matches!(op, CompareOp::Eq | CompareOp::Ne);
            match field {
                Field::Username | Field::Team if ordering => {
                    return Err(unsupported(*field, "ordering comparison"))
                }
                Field::Id if *op != CompareOp::Eq => {
                    return Err(unsupported(*field, "comparison other than '='"))
                }
                _ => {}
            }
            literal_fits(*field, operand)
        }
        Condition::Like { field, pattern, .. } => {
            if *field != Field::Username {
                return Err(unsupported(*field, "like"));
            }
            literal_fits(*field, pattern)
        }
        Condition::Between { field, lo, hi } => {
            if *field != Field::Age {
                return Err(unsupported(*field, "between"));
            }
            literal_fits(*field, lo)?;
            literal_fits(*field, hi)
        }
        Condition::In {
            field,
            negated,
            values,
        } => {
            match field {
                Field::Team => return Err(unsupported(*field, "in")),
                Field::Id if *negated => return Err(unsupported(*field, "not in")),
                _ => {}
            }
            values.iter().try_for_each(|v| literal_fits(*field, v))
        }
        Condition::Null { field, .. } => {
            if *field == Field::Id {
                return Err(unsupported(*field, "null check"));
            }
            Ok(())
        }
    }
}
