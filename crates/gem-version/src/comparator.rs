//! Version comparison utilities

use std::cmp::Ordering;

use crate::{Operator, Version};

/// Comparator plugging version ordering into generic sorting
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare_with(version1: &Version, operator: Operator, version2: &Version) -> bool {
        operator.apply(version1, version2)
    }

    /// Ordering function for `sort_by` and friends
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1.compare(version2)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &mut [Version]) {
        versions.sort_by(Self::compare);
    }

    /// Sort versions in descending order
    pub fn rsort(versions: &mut [Version]) {
        versions.sort_by(|a, b| Self::compare(b, a));
    }
}
