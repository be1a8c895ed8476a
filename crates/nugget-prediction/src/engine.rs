//! PredictionEngine: routes each activity to its predictor.
//!
//! Implements `IPredictor` from nugget-core.

use nugget_core::config::PredictionConfig;
use nugget_core::models::{PredictedActivity, PredictionResult};
use nugget_core::tracing_setup::events;
use nugget_core::traits::{IPredictor, PredictionContext};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::predictors::{feeding, pumping, sleep};

/// One prediction per activity, computed against the same context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionSummary {
    pub feeding: PredictionResult,
    pub pumping: PredictionResult,
    pub sleep: PredictionResult,
}

impl PredictionSummary {
    pub fn get(&self, activity: PredictedActivity) -> &PredictionResult {
        match activity {
            PredictedActivity::Feeding => &self.feeding,
            PredictedActivity::Pumping => &self.pumping,
            PredictedActivity::Sleep => &self.sleep,
        }
    }

    /// The prediction due soonest.
    pub fn next_due(&self) -> &PredictionResult {
        PredictedActivity::ALL
            .iter()
            .map(|a| self.get(*a))
            .min_by_key(|r| r.next_event_time)
            .unwrap_or(&self.feeding)
    }
}

/// Stateless apart from its config; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: PredictionConfig,
}

impl PredictionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PredictionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    pub fn predict_feeding(&self, ctx: &PredictionContext<'_>) -> PredictionResult {
        self.predict(PredictedActivity::Feeding, ctx)
    }

    pub fn predict_pumping(&self, ctx: &PredictionContext<'_>) -> PredictionResult {
        self.predict(PredictedActivity::Pumping, ctx)
    }

    pub fn predict_sleep(&self, ctx: &PredictionContext<'_>) -> PredictionResult {
        self.predict(PredictedActivity::Sleep, ctx)
    }

    /// Total over its input: empty windows, a missing birth date and missing
    /// preferences all fall back to age-based defaults.
    pub fn predict(&self, activity: PredictedActivity, ctx: &PredictionContext<'_>) -> PredictionResult {
        let result = match activity {
            PredictedActivity::Feeding => feeding::predict(ctx, &self.config),
            PredictedActivity::Pumping => pumping::predict(ctx, &self.config),
            PredictedActivity::Sleep => sleep::predict(ctx, &self.config),
        };
        events::prediction_computed(&result);
        result
    }

    pub fn predict_all(&self, ctx: &PredictionContext<'_>) -> PredictionSummary {
        let summary = PredictionSummary {
            feeding: self.predict_feeding(ctx),
            pumping: self.predict_pumping(ctx),
            sleep: self.predict_sleep(ctx),
        };
        tracing::debug!(
            records = ctx.activities.len(),
            next_due = %summary.next_due().activity,
            "predicted all activities"
        );
        summary
    }
}

impl IPredictor for PredictionEngine {
    fn predict(&self, activity: PredictedActivity, ctx: &PredictionContext<'_>) -> PredictionResult {
        PredictionEngine::predict(self, activity, ctx)
    }
}
