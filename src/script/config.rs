//! Inputs for the script's checks.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Literal inputs used by each check.
///
/// Missing fields fall back to the defaults, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Starting value of the counter closure
    pub counter_seed: i64,

    /// Seed passed to the getter record factory
    pub object_seed: i64,

    /// Value captured by the pure closure
    pub constant: i64,

    /// Arguments applied to `Y(x => 1/x)`
    pub probes: [f64; 2],

    /// How many times the pure closure is called
    pub stability_calls: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            counter_seed: 0,
            object_seed: 123,
            constant: 5,
            probes: [3.0, 5.0],
            stability_calls: 2,
        }
    }
}

impl ScriptConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}
