//! Operator types for requirement clauses

use std::fmt;
use std::str::FromStr;

use crate::{ConstraintParseError, Version};

/// Comparison operators for requirement clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Pessimistic (~>)
    Pessimistic,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Pessimistic => "~>",
        }
    }

    /// Get all supported operator tokens. A clause without a token means `=`.
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "!=", ">", "<", ">=", "=>", "<=", "=<", "~>"]
    }

    /// Whether `token` is exactly one of the supported operator tokens
    pub fn is_operator(token: &str) -> bool {
        Self::supported_operators().contains(&token)
    }

    /// Evaluate `version <op> bound`
    pub fn apply(self, version: &Version, bound: &Version) -> bool {
        match self {
            Operator::Equal => version.equal(bound),
            Operator::NotEqual => !version.equal(bound),
            Operator::GreaterThan => version.greater_than(bound),
            Operator::LessThan => version.less_than(bound),
            Operator::GreaterThanOrEqual => version.greater_or_equal(bound),
            Operator::LessThanOrEqual => version.less_or_equal(bound),
            Operator::Pessimistic => {
                version.greater_or_equal(bound) && version.release().less_than(&bound.bump())
            }
        }
    }
}

impl FromStr for Operator {
    type Err = ConstraintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            ">=" | "=>" => Ok(Operator::GreaterThanOrEqual),
            "<=" | "=<" => Ok(Operator::LessThanOrEqual),
            "~>" => Ok(Operator::Pessimistic),
            _ => Err(ConstraintParseError::Improper(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
