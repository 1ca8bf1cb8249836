//! Error types for version and requirement parsing

use thiserror::Error;

/// Error returned when a version string does not follow the RubyGems grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("Malformed version number string \"{0}\"")]
    Malformed(String),
    #[error("Version segment \"{segment}\" of \"{version}\" is too large")]
    SegmentOverflow { version: String, segment: String },
}

impl VersionParseError {
    /// The offending input text
    pub fn input(&self) -> &str {
        match self {
            VersionParseError::Malformed(version) => version,
            VersionParseError::SegmentOverflow { version, .. } => version,
        }
    }
}

/// Error returned when a requirement clause cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintParseError {
    #[error("Improper constraint \"{0}\"")]
    Improper(String),
    #[error("Could not parse version in constraint \"{constraint}\"")]
    Version {
        constraint: String,
        #[source]
        source: VersionParseError,
    },
}

impl ConstraintParseError {
    /// The offending clause text
    pub fn clause(&self) -> &str {
        match self {
            ConstraintParseError::Improper(clause) => clause,
            ConstraintParseError::Version { constraint, .. } => constraint,
        }
    }
}

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Version(#[from] VersionParseError),
    #[error(transparent)]
    Constraint(#[from] ConstraintParseError),
}
