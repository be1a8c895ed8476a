use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One observation in a prediction's recent pattern, with the gap to the
/// observation before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternEntry {
    pub start_time: DateTime<Utc>,
    pub amount_ml: Option<f64>,
    pub duration_minutes: Option<f64>,
    /// Hours since the previous observation. `None` for the oldest entry.
    pub interval_hours: Option<f64>,
    /// Whether `interval_hours` was used in the running average.
    pub is_valid_interval: bool,
}
