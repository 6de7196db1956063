//! Store configuration.
//!
//! # Invariants
//! - Missing fields fall back to `StoreConfig::default()`.
//! - Unknown fields are rejected so typos do not silently change behavior.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Options applied when a registry builds its stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Seed note and transaction stores with one demo record each.
    pub seed_defaults: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

impl StoreConfig {
    /// Parses a JSON object such as `{"seed_defaults": false}`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;

    #[test]
    fn empty_object_uses_defaults() {
        let config = StoreConfig::from_json("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.seed_defaults);
    }

    #[test]
    fn explicit_seed_flag_is_respected() {
        let config = StoreConfig::from_json(r#"{"seed_defaults": false}"#).unwrap();
        assert!(!config.seed_defaults);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = StoreConfig::from_json(r#"{"seed": false}"#).unwrap_err();
        assert!(err.to_string().contains("invalid store config"));
    }
}
