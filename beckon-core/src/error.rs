//! Error types for Beckon.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ArgumentError`] - Errors while binding call arguments to a typed member
//! - [`TableError`] - Errors while building a method table
//!
//! Errors raised by invoked members themselves are not wrapped: they travel
//! through the invocation layer as [`BoxError`], unmodified.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while binding positional arguments to a typed member.
#[derive(Error, Debug)]
pub enum ArgumentError {
    /// The call supplied the wrong number of arguments.
    #[error("argument count does not match. expected {expected}, got {got}")]
    Count {
        /// Number of arguments the member accepts.
        expected: usize,
        /// Number of arguments the call supplied.
        got: usize,
    },

    /// An argument could not be converted to the member's parameter type.
    #[error("cannot convert argument #{index}: {source}")]
    Convert {
        /// Zero-based position of the offending argument.
        index: usize,
        /// The underlying conversion error.
        #[source]
        source: BoxError,
    },
}

impl ArgumentError {
    /// Build an [`ArgumentError::Convert`] for the argument at `index`.
    pub fn convert(index: usize, source: impl Into<BoxError>) -> Self {
        ArgumentError::Convert {
            index,
            source: source.into(),
        }
    }
}

/// Errors that can occur while building a method table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A method was registered under a name that is already taken.
    #[error("duplicate method name: {0}")]
    DuplicateName(String),
}
