//! Untyped combinators over a dynamic value.
//!
//! Combinator terms are untyped, so every term is a [`Value`]: either a
//! number or a function from `Value` to `Value`. Application is strict
//! and fallible; applying a number is an [`ApplyError`].
//!
//! - K, S, I and Y are built from closures with no state of their own
//! - I is derived as `S(K)(K)`
//! - Y is built only from S and K
//! - [`FixedPointExperiment`] probes `Y(x => 1/x)` at two arguments

mod error;
mod fixed_point;
mod terms;
mod value;

pub use error::ApplyError;
pub use fixed_point::{one, FixedPointExperiment, FixedPointOutcome};
pub use terms::{identity, k, reciprocal, s, y};
pub use value::{Function, Value};
