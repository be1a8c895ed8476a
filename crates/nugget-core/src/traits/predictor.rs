use chrono::{DateTime, Utc};

use crate::activity::{ActivityRecord, CustomPreferences};
use crate::models::{PredictedActivity, PredictionResult};

/// Everything a predictor reads. `now` is always injected so identical
/// contexts produce identical results.
#[derive(Debug, Clone, Copy)]
pub struct PredictionContext<'a> {
    /// Recent records, unsorted, possibly of unrelated types.
    pub activities: &'a [ActivityRecord],
    pub birth_date: Option<DateTime<Utc>>,
    pub preferences: Option<&'a CustomPreferences>,
    pub now: DateTime<Utc>,
}

impl<'a> PredictionContext<'a> {
    pub fn new(activities: &'a [ActivityRecord], now: DateTime<Utc>) -> Self {
        Self {
            activities,
            birth_date: None,
            preferences: None,
            now,
        }
    }

    pub fn with_birth_date(mut self, birth_date: DateTime<Utc>) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_preferences(mut self, preferences: &'a CustomPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

/// Next-event prediction over recent activity history.
///
/// Implementations are total: any context satisfying the type contract
/// yields a fully populated result.
pub trait IPredictor: Send + Sync {
    fn predict(&self, activity: PredictedActivity, ctx: &PredictionContext<'_>) -> PredictionResult;
}
