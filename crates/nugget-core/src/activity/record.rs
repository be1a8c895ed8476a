use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::activity_type::ActivityType;
use super::details::{ActivityDetails, NursingSide};

/// One logged caregiving event.
///
/// Created, updated and deleted by the activity service; the prediction
/// engine only reads a bounded recent window of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityRecord {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub amount_ml: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub details: Option<ActivityDetails>,
    /// Placeholder entries for planned events; never used as observations.
    #[serde(default)]
    pub is_scheduled: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ActivityRecord {
    /// Minimal record with no amount, duration or details.
    pub fn new(id: impl Into<String>, activity_type: ActivityType, start_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            start_time,
            activity_type,
            amount_ml: None,
            duration_minutes: None,
            details: None,
            is_scheduled: false,
            notes: None,
        }
    }

    pub fn with_amount(mut self, ml: f64) -> Self {
        self.amount_ml = Some(ml);
        self
    }

    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_details(mut self, details: ActivityDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn scheduled(mut self) -> Self {
        self.is_scheduled = true;
        self
    }

    /// Side used by a nursing session.
    ///
    /// An explicit side wins; otherwise it is inferred from the per-side
    /// durations. Non-nursing records have no side.
    pub fn nursing_side(&self) -> Option<NursingSide> {
        if self.activity_type != ActivityType::Nursing {
            return None;
        }
        match &self.details {
            Some(ActivityDetails::Nursing {
                side: Some(side), ..
            }) => Some(*side),
            Some(ActivityDetails::Nursing {
                side: None,
                left_minutes,
                right_minutes,
            }) => Some(NursingSide::infer(*left_minutes, *right_minutes)),
            _ => Some(NursingSide::Both),
        }
    }

    /// Duration of the event in minutes.
    ///
    /// Falls back to the sum of nursing side durations when the record
    /// carries no overall duration.
    pub fn effective_duration_minutes(&self) -> Option<f64> {
        if self.duration_minutes.is_some() {
            return self.duration_minutes;
        }
        match &self.details {
            Some(ActivityDetails::Nursing {
                left_minutes,
                right_minutes,
                ..
            }) if left_minutes.is_some() || right_minutes.is_some() => {
                Some(left_minutes.unwrap_or(0.0) + right_minutes.unwrap_or(0.0))
            }
            _ => None,
        }
    }
}
