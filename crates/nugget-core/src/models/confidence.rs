use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{HIGH_CONFIDENCE_MIN_SAMPLES, MEDIUM_CONFIDENCE_MIN_SAMPLES};

/// Weights applied to the age-based baseline, the recent average interval
/// and the last observed interval. Always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierWeights {
    pub age_based: f64,
    pub recent_average: f64,
    pub last_interval: f64,
}

impl TierWeights {
    pub const LOW: Self = Self {
        age_based: 1.0,
        recent_average: 0.0,
        last_interval: 0.0,
    };
    pub const MEDIUM: Self = Self {
        age_based: 0.5,
        recent_average: 0.3,
        last_interval: 0.2,
    };
    pub const HIGH: Self = Self {
        age_based: 0.4,
        recent_average: 0.4,
        last_interval: 0.2,
    };

    pub fn sum(&self) -> f64 {
        self.age_based + self.recent_average + self.last_interval
    }
}

/// Qualitative confidence, a pure function of the valid-gap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// 0 valid gaps → low, 1–2 → medium, 3+ → high.
    pub fn from_sample_count(valid_gaps: usize) -> Self {
        if valid_gaps >= HIGH_CONFIDENCE_MIN_SAMPLES {
            Self::High
        } else if valid_gaps >= MEDIUM_CONFIDENCE_MIN_SAMPLES {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn weights(self) -> TierWeights {
        match self {
            Self::High => TierWeights::HIGH,
            Self::Medium => TierWeights::MEDIUM,
            Self::Low => TierWeights::LOW,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
