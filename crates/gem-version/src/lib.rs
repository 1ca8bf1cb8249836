//! Version parsing, comparison and requirement matching compatible with RubyGems
//!
//! This crate reproduces the ordering rules of `Gem::Version` (including its
//! prerelease handling) and the requirement grammar of `Gem::Requirement`,
//! including the pessimistic `~>` operator.
//!
//! ```
//! use gem_version::{parse_constraints, parse_version};
//!
//! let constraints = parse_constraints(">= 1.0, < 1.4 || > 2.0").unwrap();
//! assert!(constraints.check(&parse_version("2.1").unwrap()));
//! assert!(!constraints.check(&parse_version("1.5").unwrap()));
//! ```

pub mod constraint;
mod comparator;
mod error;
mod gem;
mod version;

pub use comparator::Comparator;
pub use constraint::{parse_constraints, Constraint, Constraints, Operator};
pub use error::{ConstraintParseError, Error, VersionParseError};
pub use gem::Gem;
pub use version::{parse_version, Segment, Version};
