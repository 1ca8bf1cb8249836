//! Requirement clauses and expressions

pub mod constraint;
mod constraints;
mod operator;

pub use constraint::Constraint;
pub use constraints::{parse_constraints, Constraints};
pub use operator::Operator;
