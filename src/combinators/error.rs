//! Application errors for untyped values.

use thiserror::Error;

/// Errors that can occur when applying an untyped value.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApplyError {
    /// A number was used in function position
    #[error("{value} is not a function")]
    NotAFunction { value: f64 },

    /// A numeric primitive received a function
    #[error("{operation} expects a number, got function {function}")]
    NotANumber {
        operation: &'static str,
        function: &'static str,
    },
}
