//! Error types for crosswalk construction.

use std::fmt;

/// Errors from building a crosswalk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Two rules write the same target field.
    DuplicateTarget(String),
    /// A rule has an empty target or source name.
    EmptyFieldName { target: String },
    /// A rule lists no source field.
    NoSources(String),
    /// Rule file could not be parsed.
    InvalidRules(String),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTarget(t) => write!(f, "Target field '{t}' mapped more than once"),
            Self::EmptyFieldName { target } => {
                write!(f, "Empty field name in rule for '{target}'")
            }
            Self::NoSources(t) => write!(f, "Rule for '{t}' has no source field"),
            Self::InvalidRules(msg) => write!(f, "Invalid crosswalk rules: {msg}"),
        }
    }
}

impl std::error::Error for MappingError {}
