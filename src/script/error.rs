//! Script error types.

use crate::assertion::AssertionFailed;
use crate::combinators::ApplyError;
use thiserror::Error;

/// The first failure that stopped a script run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScriptError {
    /// A check's assertion did not hold
    #[error("check '{check}' failed: {source}")]
    Assertion {
        check: &'static str,
        source: AssertionFailed,
    },

    /// A combinator term could not be built
    #[error("check '{check}' could not evaluate: {source}")]
    Apply {
        check: &'static str,
        source: ApplyError,
    },
}

impl ScriptError {
    /// Name of the check that failed.
    pub fn check(&self) -> &'static str {
        match self {
            Self::Assertion { check, .. } | Self::Apply { check, .. } => check,
        }
    }
}

/// Errors raised by a single check, before it is named.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailed),

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

impl CheckError {
    pub(crate) fn in_check(self, check: &'static str) -> ScriptError {
        match self {
            Self::Assertion(source) => ScriptError::Assertion { check, source },
            Self::Apply(source) => ScriptError::Apply { check, source },
        }
    }
}

/// Errors that can occur when loading a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config at {path}: {reason}")]
    Read { path: String, reason: String },

    /// The config text is not valid JSON for `ScriptConfig`
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Errors that can occur when encoding or decoding a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
