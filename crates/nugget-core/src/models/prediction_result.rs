use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::{BlendResult, ConfidenceLevel, PatternEntry, TierWeights};
use crate::activity::NursingSide;

/// The activity a prediction is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PredictedActivity {
    Feeding,
    Pumping,
    Sleep,
}

impl PredictedActivity {
    pub const ALL: [PredictedActivity; 3] = [Self::Feeding, Self::Pumping, Self::Sleep];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feeding => "feeding",
            Self::Pumping => "pumping",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for PredictedActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw inputs behind a prediction, shown in the "how was this calculated" view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationDetails {
    #[ts(type = "number | null")]
    pub age_in_days: Option<i64>,
    pub age_based_interval: f64,
    pub recent_average_interval: Option<f64>,
    pub last_interval: Option<f64>,
    pub weights: TierWeights,
    /// Number of valid gaps in the window.
    pub sample_count: usize,
    /// Weight given to custom preferences in the amount/duration blends.
    pub preference_weight: f64,
}

/// Output of one predictor call. Freshly built each time, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub activity: PredictedActivity,
    pub next_event_time: DateTime<Utc>,
    pub confidence_level: ConfidenceLevel,
    /// Final blended interval in hours.
    pub interval_hours: f64,
    pub average_interval_hours: Option<f64>,
    pub last_event_time: Option<DateTime<Utc>>,
    pub last_event_amount: Option<f64>,
    /// Window observations, oldest first.
    pub recent_pattern: Vec<PatternEntry>,
    /// Whole millilitres.
    pub suggested_volume: Option<f64>,
    /// Whole minutes.
    pub suggested_duration: Option<f64>,
    pub volume_blend: BlendResult,
    pub duration_blend: BlendResult,
    /// Next nursing side; feeding predictions only.
    pub suggested_side: Option<NursingSide>,
    pub calculation_details: CalculationDetails,
}

impl PredictionResult {
    /// Whole minutes from `now` until the predicted event. Negative when overdue.
    pub fn minutes_until(&self, now: DateTime<Utc>) -> i64 {
        (self.next_event_time - now).num_minutes()
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.next_event_time < now
    }
}
