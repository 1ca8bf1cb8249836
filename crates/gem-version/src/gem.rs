//! Gem facade providing high-level version operations on plain strings

use crate::{Comparator, ConstraintParseError, Constraints, Version};

/// Main facade for RubyGems version operations
pub struct Gem;

impl Gem {
    /// Check if a version satisfies a requirement. Unparseable input never
    /// satisfies anything.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match Constraints::parse(constraints) {
            Ok(c) => c.check(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given requirement
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let parsed_constraints = match Constraints::parse(constraints) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let version = Version::parse(v).ok()?;
                if parsed_constraints.check(&version) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Parse a requirement into a reusable representation
    pub fn parse_constraints(constraints: &str) -> Result<Constraints, ConstraintParseError> {
        Constraints::parse(constraints)
    }

    /// Check a version string against a pre-parsed requirement
    pub fn satisfies_parsed(version: &str, constraints: &Constraints) -> bool {
        match Version::parse(version) {
            Ok(v) => constraints.check(&v),
            Err(_) => false,
        }
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Keep the input index so callers get their own spelling back
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
