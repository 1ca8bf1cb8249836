//! Single requirement clause, e.g. `~> 1.4`

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::Operator;
use crate::version::VERSION_PATTERN;
use crate::{ConstraintParseError, Version};

lazy_static! {
    // Longest tokens first so `>=` wins over `>`
    static ref CONSTRAINT_RE: Regex = {
        let mut operators = Operator::supported_operators().to_vec();
        operators.sort_by_key(|op| std::cmp::Reverse(op.len()));
        let operators = operators
            .iter()
            .map(|op| regex::escape(op))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"^\s*({})?\s*({})\s*$", operators, VERSION_PATTERN)).unwrap()
    };
}

/// An operator and the version it compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Parse a single clause such as `>= 1.2` or `1.0`
    pub fn parse(clause: &str) -> Result<Self, ConstraintParseError> {
        let caps = match CONSTRAINT_RE.captures(clause) {
            Some(caps) => caps,
            None => {
                log::debug!("Rejected constraint {:?}", clause);
                return Err(ConstraintParseError::Improper(clause.to_string()));
            }
        };

        let operator = caps
            .get(1)
            .map_or(Ok(Operator::Equal), |m| m.as_str().parse::<Operator>())?;
        let version_text = caps.get(2).map_or("", |m| m.as_str());
        let version = Version::parse(version_text).map_err(|source| ConstraintParseError::Version {
            constraint: clause.to_string(),
            source,
        })?;

        Ok(Constraint { operator, version })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check whether `version` satisfies this clause
    pub fn check(&self, version: &Version) -> bool {
        self.operator.apply(version, &self.version)
    }
}

impl FromStr for Constraint {
    type Err = ConstraintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}
