//! Typed error type for conventionizer.
//!
//! Almost every conversion is a total function. The only failure is an
//! operation that must uppercase a first character being given none.
//! Parsing a [`Convention`](crate::Convention) name has its own error,
//! [`ParseConventionError`], since it is not a conversion.

use thiserror::Error;

/// Errors returned by conventionizer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConventionError {
    /// An operation that capitalizes a first character was given an empty string.
    #[error("invalid argument: {operation} requires a non-empty string")]
    InvalidArgument {
        /// Name of the operation that rejected the input.
        operation: &'static str,
    },
}

/// Error returned when a string names no known [`Convention`](crate::Convention).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming convention '{name}'")]
pub struct ParseConventionError {
    name: String,
}

impl ParseConventionError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The rejected name, as given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConventionError>;
