use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Most recent same-type records considered per prediction.
    pub window_size: usize,
    /// Gaps at or above this many hours are shown but never averaged.
    pub max_valid_gap_hours: f64,
    /// Preference weight used when the caller supplies none.
    pub feeding_preference_weight: f64,
    pub pumping_preference_weight: f64,
    pub sleep_preference_weight: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::DEFAULT_WINDOW_SIZE,
            max_valid_gap_hours: defaults::DEFAULT_MAX_VALID_GAP_HOURS,
            feeding_preference_weight: defaults::DEFAULT_FEEDING_PREFERENCE_WEIGHT,
            pumping_preference_weight: defaults::DEFAULT_PUMPING_PREFERENCE_WEIGHT,
            sleep_preference_weight: defaults::DEFAULT_SLEEP_PREFERENCE_WEIGHT,
        }
    }
}
