//! Configuration for the state-vector simulator.

use serde::{Deserialize, Serialize};

/// Construction-time limits and defaults for a simulator instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatorConfig {
    /// Soft ceiling on `number_of_qubits`. Memory is exponential in this
    /// value, so the default matches spec.md's "roughly 25-30 qubits"
    /// Non-goal boundary.
    pub max_qubits: usize,
    /// Default shot count used when a caller does not specify one.
    pub default_shots: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 30,
            default_shots: 1024,
        }
    }
}

impl SimulatorConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| crate::SimError::config(e.to_string()))?;
        tracing::debug!(max_qubits = config.max_qubits, default_shots = config.default_shots, "loaded simulator config");
        Ok(config)
    }

    /// Serializes configuration to a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::SimError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.max_qubits, 30);
        assert_eq!(config.default_shots, 1024);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SimulatorConfig::default();
        let json = config.to_json().unwrap();
        let parsed = SimulatorConfig::from_json(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
