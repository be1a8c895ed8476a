//! Top-level Nugget configuration.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`NUGGET_*`)
//! 2. TOML file or string
//! 3. Compiled defaults

pub mod defaults;
pub mod observability_config;
pub mod prediction_config;

pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Aggregates all sub-configs. Missing sections and keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuggetConfig {
    pub prediction: PredictionConfig,
    pub observability: ObservabilityConfig,
}

impl NuggetConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, apply `NUGGET_*` environment overrides, then validate.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("NUGGET_WINDOW_SIZE").and_then(|v| v.parse::<usize>().ok()) {
            self.prediction.window_size = v;
        }
        if let Some(v) = lookup("NUGGET_MAX_VALID_GAP_HOURS").and_then(|v| v.parse::<f64>().ok()) {
            self.prediction.max_valid_gap_hours = v;
        }
        if let Some(v) = lookup("NUGGET_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.prediction;
        if p.window_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.window_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(p.max_valid_gap_hours > 0.0 && p.max_valid_gap_hours.is_finite()) {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.max_valid_gap_hours".to_string(),
                message: "must be a positive number of hours".to_string(),
            });
        }
        let weights = [
            ("prediction.feeding_preference_weight", p.feeding_preference_weight),
            ("prediction.pumping_preference_weight", p.pumping_preference_weight),
            ("prediction.sleep_preference_weight", p.sleep_preference_weight),
        ];
        for (field, w) in weights {
            if !(0.0..=1.0).contains(&w) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_overrides_apply_parsed_values() {
        let env: HashMap<&str, &str> = [
            ("NUGGET_WINDOW_SIZE", "20"),
            ("NUGGET_MAX_VALID_GAP_HOURS", "8.5"),
            ("NUGGET_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();
        let mut config = NuggetConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.prediction.window_size, 20);
        assert_eq!(config.prediction.max_valid_gap_hours, 8.5);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn env_overrides_ignore_garbage() {
        let mut config = NuggetConfig::default();
        config.apply_overrides(|k| (k == "NUGGET_WINDOW_SIZE").then(|| "lots".to_string()));
        assert_eq!(config.prediction.window_size, defaults::DEFAULT_WINDOW_SIZE);
    }
}
