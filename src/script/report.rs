//! Serializable record of a passing script run.

use super::config::ScriptConfig;
use super::error::ReportError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A check that passed, and when.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub name: String,
    pub passed_at: DateTime<Utc>,
}

/// Record of a script run in which every check passed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptReport {
    /// Unique run identifier
    pub run_id: Uuid,

    pub started_at: DateTime<Utc>,

    pub finished_at: DateTime<Utc>,

    /// Inputs the checks ran with
    pub config: ScriptConfig,

    /// Passed checks in execution order
    pub checks: Vec<CheckRecord>,
}

impl ScriptReport {
    pub(crate) fn start(config: ScriptConfig) -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            config,
            checks: Vec::new(),
        }
    }

    /// Return a new report with `name` recorded as passed.
    pub(crate) fn record(mut self, name: &str) -> Self {
        let now = Utc::now();
        self.checks.push(CheckRecord {
            name: name.to_string(),
            passed_at: now,
        });
        self.finished_at = now;
        self
    }

    /// Names of the passed checks, in order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name.as_str()).collect()
    }

    /// Encode the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    /// Decode a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))
    }

    /// Encode the report in bincode's binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    /// Decode a report from bincode bytes.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, ReportError> {
        bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))
    }
}
