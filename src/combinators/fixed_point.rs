//! The `Y(x => 1/x)` fixed-point experiment.
//!
//! `x => 1/x` is not contractive, and under strict evaluation this Y never
//! produces a call-independent value: applying `one` to a probe stalls on
//! using the probe itself as a function. The outcome therefore depends on
//! the argument, and `one(3) != one(5)`. This is the expected result.

use super::error::ApplyError;
use super::terms::{reciprocal, y};
use super::value::Value;

/// `one = Y(x => 1/x)`.
pub fn one() -> Result<Value, ApplyError> {
    y()?.apply(reciprocal())
}

/// Outcomes of applying `one` to two probes.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPointOutcome {
    pub first: Result<Value, ApplyError>,
    pub second: Result<Value, ApplyError>,
}

impl FixedPointOutcome {
    /// Whether the two probes produced different outcomes.
    ///
    /// Outcomes compare by numeric equality, so a `NaN` probe never equals
    /// itself and `NaN, NaN` diverges.
    pub fn diverges(&self) -> bool {
        self.first != self.second
    }
}

/// Applies `one` to a pair of probes.
///
/// # Example
///
/// ```rust
/// use purity::combinators::FixedPointExperiment;
///
/// let outcome = FixedPointExperiment::new(3.0, 5.0).run().unwrap();
/// assert!(outcome.diverges());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPointExperiment {
    probes: (f64, f64),
}

impl FixedPointExperiment {
    /// Create an experiment for two probes.
    pub fn new(first: f64, second: f64) -> Self {
        Self {
            probes: (first, second),
        }
    }

    /// The probes, in application order.
    pub fn probes(&self) -> (f64, f64) {
        self.probes
    }

    /// Build `one` and apply it to both probes.
    ///
    /// Only a failure to build `one` is an error; each probe's outcome,
    /// failed or not, is part of the result.
    pub fn run(&self) -> Result<FixedPointOutcome, ApplyError> {
        let one = one()?;
        let (first, second) = self.probes;
        Ok(FixedPointOutcome {
            first: one.apply(first),
            second: one.apply(second),
        })
    }
}
