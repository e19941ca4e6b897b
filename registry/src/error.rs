//! Registry error types.

use thiserror::Error;

/// Result type for constraint name parsing.
pub type ParseResult<T> = Result<T, ParseConstraintError>;

/// A constraint name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown constraint: {name}")]
pub struct ParseConstraintError {
    name: String,
}

impl ParseConstraintError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name as it was written.
    pub fn name(&self) -> &str {
        &self.name
    }
}
