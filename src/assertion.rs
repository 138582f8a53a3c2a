//! The assertion primitive used by the script.
//!
//! A failed assertion is a value, not a panic: [`check`] and the [`check!`]
//! macro return `Err(AssertionFailed)` naming the failing expression, and
//! callers stop on the first one with `?`.
//!
//! [`check!`]: crate::check

use thiserror::Error;

/// The single assertion error kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("assertion failed: {expression}")]
pub struct AssertionFailed {
    /// Source text of the expression that evaluated to `false`
    pub expression: String,
}

/// Succeed when `condition` holds, otherwise fail naming `expression`.
pub fn check(condition: bool, expression: &str) -> Result<(), AssertionFailed> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailed {
            expression: expression.to_string(),
        })
    }
}

/// Assert a boolean expression, returning `Result<(), AssertionFailed>`.
///
/// The error carries the expression's source text.
///
/// # Example
///
/// ```
/// use purity::check;
/// use purity::assertion::AssertionFailed;
///
/// fn run() -> Result<(), AssertionFailed> {
///     check!(1 + 1 == 2)?;
///     check!(2 + 2 == 5)?;
///     Ok(())
/// }
///
/// let err = run().unwrap_err();
/// assert_eq!(err.expression, "2 + 2 == 5");
/// ```
#[macro_export]
macro_rules! check {
    ($condition:expr $(,)?) => {
        $crate::assertion::check($condition, stringify!($condition))
    };
}
