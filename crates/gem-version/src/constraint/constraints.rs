//! Full requirement expressions: `||`-separated groups of AND-ed clauses

use std::fmt;
use std::str::FromStr;

use super::{Constraint, Operator};
use crate::{ConstraintParseError, Version};

/// A parsed requirement such as `">= 1.0, < 1.4 || > 2.0"`.
///
/// A version satisfies the requirement when every clause of at least one
/// group holds for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    groups: Vec<Vec<Constraint>>,
    pretty_string: String,
}

impl Constraints {
    /// Parse a requirement string.
    ///
    /// Groups are separated by `||`. Inside a group, clauses are separated by
    /// commas or whitespace; an operator may be followed by whitespace before
    /// its version.
    pub fn parse(text: &str) -> Result<Self, ConstraintParseError> {
        let groups = text
            .split("||")
            .map(Self::parse_group)
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!("Parsed requirement {:?} into {} group(s)", text, groups.len());

        Ok(Constraints {
            groups,
            pretty_string: text.trim().to_string(),
        })
    }

    fn parse_group(group: &str) -> Result<Vec<Constraint>, ConstraintParseError> {
        let mut constraints = Vec::new();

        for piece in group.split(',') {
            let clauses = split_clauses(piece);
            if clauses.is_empty() {
                log::debug!("Empty clause in requirement group {:?}", group);
                return Err(ConstraintParseError::Improper(piece.to_string()));
            }
            for clause in clauses {
                constraints.push(Constraint::parse(&clause)?);
            }
        }

        Ok(constraints)
    }

    /// The parsed groups, in input order
    pub fn groups(&self) -> &[Vec<Constraint>] {
        &self.groups
    }

    /// The requirement as it was written
    pub fn pretty_string(&self) -> &str {
        &self.pretty_string
    }

    /// Check whether `version` satisfies any group. An empty group holds for
    /// every version.
    pub fn check(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|c| c.check(version)))
    }

    /// Iterate over the versions satisfying this requirement
    pub fn filter<'a>(&'a self, versions: &'a [Version]) -> impl Iterator<Item = &'a Version> + 'a {
        versions.iter().filter(move |v| self.check(v))
    }

    /// The highest version satisfying this requirement
    pub fn max_satisfying<'a>(&self, versions: &'a [Version]) -> Option<&'a Version> {
        versions.iter().filter(|v| self.check(v)).max()
    }

    /// The lowest version satisfying this requirement
    pub fn min_satisfying<'a>(&self, versions: &'a [Version]) -> Option<&'a Version> {
        versions.iter().filter(|v| self.check(v)).min()
    }
}

/// Split a comma-free piece of a group on whitespace, rejoining a bare
/// operator with the token after it.
fn split_clauses(piece: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut tokens = piece.split_whitespace();

    while let Some(token) = tokens.next() {
        if Operator::is_operator(token) {
            match tokens.next() {
                Some(version) => clauses.push(format!("{} {}", token, version)),
                None => clauses.push(token.to_string()),
            }
        } else {
            clauses.push(token.to_string());
        }
    }

    clauses
}

/// Parse a requirement string
pub fn parse_constraints(text: &str) -> Result<Constraints, ConstraintParseError> {
    Constraints::parse(text)
}

impl FromStr for Constraints {
    type Err = ConstraintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraints::parse(s)
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            for (j, constraint) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", constraint)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn check(constraints: &str, version: &str) -> bool {
        Constraints::parse(constraints).unwrap().check(&v(version))
    }

    #[test]
    fn test_parse() {
        assert!(Constraints::parse("> 1.0").is_ok());
        assert!(Constraints::parse("~> 1.0, != 1.0.3 || >= 2").is_ok());

        assert_eq!(
            Constraints::parse("> 1.0 || < foo").unwrap_err(),
            ConstraintParseError::Improper("< foo".to_string())
        );
        assert!(Constraints::parse(">>> 1.3.5").is_err());
        assert!(Constraints::parse("> blah").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_clauses() {
        for text in ["", "   ", "1.0,", ", 1.0", "|| 1.0", "1.0 ||", "1.0,,2.0"] {
            assert!(
                matches!(Constraints::parse(text), Err(ConstraintParseError::Improper(_))),
                "expected {:?} to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_dangling_operator() {
        assert_eq!(
            Constraints::parse("> 1.0 <").unwrap_err(),
            ConstraintParseError::Improper("<".to_string())
        );
    }

    #[test]
    fn test_groups() {
        let constraints = Constraints::parse(">= 1.0, < 1.4 || > 2.0").unwrap();
        let groups = constraints.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
        assert_eq!(groups[0][1].operator(), Operator::LessThan);
        assert_eq!(groups[1][0].version(), &v("2.0"));
    }

    #[test]
    fn test_list_separators() {
        // Comma separated
        assert!(!check("> 1.1, < 1.3", "1.1"));
        assert!(check("> 1.1, <1.3", "1.2"));
        assert!(!check("> 1.1, < 1.3", "1.3"));

        // Space separated
        assert!(!check("> 1.1 < 1.3", "1.1"));
        assert!(check("> 1.1\t<1.3", "1.2"));
        assert!(!check("> 1.1 < 1.3", "1.3"));
    }

    #[test]
    fn test_multiple() {
        assert!(!check(">= 1.4, <= 1.6, != 1.5", "1.3"));
        assert!(check(">= 1.4  <= 1.6  != 1.5", "1.4"));
        assert!(!check(">= 1.4  <= 1.6  != 1.5", "1.5"));
        assert!(check(">= 1.4, <= 1.6, != 1.5", "1.6"));
        assert!(!check(">= 1.4, <= 1.6, != 1.5", "1.7"));
        assert!(!check(">= 1.4, <= 1.6, != 1.5", "2.0"));

        assert!(check(">= 1.4.4, < 1.5", "1.4.5"));
        assert!(check(">= 1.4.4 <1.5", "1.5.0.rc1"));
        assert!(!check(">= 1.4.4, < 1.5", "1.5.0"));

        assert!(check(">= 1.4.4, < 1.5.a", "1.4.5"));
        assert!(!check(">= 1.4.4, < 1.5.a", "1.5.0.rc1"));
        assert!(!check(">= 1.4.4  < 1.5.a", "1.5.0"));
    }

    #[test]
    fn test_or_groups() {
        assert!(check(">= 1.0, < 1.4 || > 2.0", "2.1"));
        assert!(check(">= 1.0, < 1.4 || > 2.0", "1.2"));
        assert!(!check(">= 1.0, < 1.4 || > 2.0", "1.5"));
        assert!(!check(">= 1.0, < 1.4 || > 2.0", "2.0"));
        assert!(check("~> 1.4||~> 2.1", "2.9"));
    }

    #[test]
    fn test_empty_group_is_vacuously_true() {
        let constraints = Constraints {
            groups: vec![Vec::new()],
            pretty_string: String::new(),
        };
        assert!(constraints.check(&v("1.0")));

        let none = Constraints {
            groups: Vec::new(),
            pretty_string: String::new(),
        };
        assert!(!none.check(&v("1.0")));
    }

    #[test]
    fn test_satisfying() {
        let versions: Vec<Version> = ["1.3", "1.4", "1.4.9", "1.5.a", "1.5", "2.0"]
            .iter()
            .map(|s| v(s))
            .collect();
        let constraints = Constraints::parse("~> 1.4").unwrap();

        let matched: Vec<String> = constraints.filter(&versions).map(|v| v.to_string()).collect();
        assert_eq!(matched, vec!["1.4", "1.4.9", "1.5.a", "1.5"]);
        assert_eq!(constraints.max_satisfying(&versions), Some(&v("1.5")));
        assert_eq!(constraints.min_satisfying(&versions), Some(&v("1.4")));

        let none = Constraints::parse("> 3").unwrap();
        assert_eq!(none.max_satisfying(&versions), None);
    }

    #[test]
    fn test_display() {
        let constraints = Constraints::parse(">=1.0 <1.4||>2.0").unwrap();
        assert_eq!(constraints.to_string(), ">= 1.0, < 1.4 || > 2.0");
        assert_eq!(constraints.pretty_string(), ">=1.0 <1.4||>2.0");
    }
}
