//! The script: an ordered list of independent checks.
//!
//! Checks run top to bottom and the first failure ends the run. A passing
//! run yields a [`ScriptReport`]; a failing run yields the [`ScriptError`]
//! of the first check that failed.

pub mod checks;
mod config;
mod error;
mod report;

pub use config::ScriptConfig;
pub use error::{CheckError, ConfigError, ReportError, ScriptError};
pub use report::{CheckRecord, ScriptReport};

use std::fmt;

/// Type alias for check bodies.
type CheckFn = Box<dyn Fn(&ScriptConfig) -> Result<(), CheckError> + Send + Sync>;

/// A named, independent check.
pub struct Check {
    name: &'static str,
    run: CheckFn,
}

impl Check {
    /// Create a check from a name and a body.
    pub fn new<F>(name: &'static str, run: F) -> Self
    where
        F: Fn(&ScriptConfig) -> Result<(), CheckError> + Send + Sync + 'static,
    {
        Check {
            name,
            run: Box::new(run),
        }
    }

    /// The check's name, as reported on failure.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the check against `config`.
    pub fn run(&self, config: &ScriptConfig) -> Result<(), CheckError> {
        (self.run)(config)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// Ordered collection of checks.
#[derive(Debug, Default)]
pub struct Script {
    checks: Vec<Check>,
}

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The script's standard blocks, in order.
    pub fn standard() -> Self {
        Self::new()
            .with_check(Check::new("counter", checks::counter))
            .with_check(Check::new("getter", checks::getter_record))
            .with_check(Check::new("constant", checks::pure_constant))
            .with_check(Check::new("identity", checks::identity_combinator))
            .with_check(Check::new("fixed_point", checks::fixed_point))
    }

    /// Append a check.
    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Names of the checks, in run order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(Check::name).collect()
    }

    /// Run every check in order, stopping at the first failure.
    pub fn run(&self, config: &ScriptConfig) -> Result<ScriptReport, ScriptError> {
        let mut report = ScriptReport::start(config.clone());
        tracing::info!(run_id = %report.run_id, checks = self.checks.len(), "Script started");

        for check in &self.checks {
            if let Err(e) = check.run(config) {
                let err = e.in_check(check.name());
                tracing::error!(run_id = %report.run_id, check = check.name(), "{err}");
                return Err(err);
            }
            tracing::info!(check = check.name(), "Check passed");
            report = report.record(check.name());
        }

        tracing::info!(
            run_id = %report.run_id,
            passed = report.checks.len(),
            "Script finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::AssertionFailed;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn standard_script_lists_blocks_in_order() {
        assert_eq!(
            Script::standard().check_names(),
            vec!["counter", "getter", "constant", "identity", "fixed_point"]
        );
    }

    #[test]
    fn empty_script_passes() {
        let report = Script::new().run(&ScriptConfig::default()).unwrap();
        assert!(report.checks.is_empty());
    }

    #[test]
    fn stops_on_first_failure() {
        let ran = Arc::new(AtomicUsize::new(0));
        let after = Arc::clone(&ran);

        let script = Script::new()
            .with_check(Check::new("fails", |_| {
                Err(AssertionFailed {
                    expression: "false".to_string(),
                }
                .into())
            }))
            .with_check(Check::new("never", move |_| {
                after.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }));

        let err = script.run(&ScriptConfig::default()).unwrap_err();

        assert_eq!(err.check(), "fails");
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn report_records_passed_checks() {
        let report = Script::standard().run(&ScriptConfig::default()).unwrap();
        assert_eq!(report.check_names(), Script::standard().check_names());
    }
}
