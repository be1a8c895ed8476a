//! Feeding predictor: bottle and nursing share one interval, but the
//! suggested amount follows the method of the most recent feeding.

use nugget_core::activity::{ActivityRecord, ActivityType};
use nugget_core::config::PredictionConfig;
use nugget_core::models::{BlendResult, PredictedActivity, PredictionResult};
use nugget_core::traits::PredictionContext;

use super::{assemble, preference_weights, round_suggestion, ActivityWindow, Suggestions, Timing};
use crate::blend::{blend, BlendInput, BlendWeights};
use crate::tables;

/// How the baby was last fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedingMethod {
    Bottle,
    Nursing,
}

impl FeedingMethod {
    /// Method of the newest record in the window; bottle when there is none.
    pub fn of_latest(window: &ActivityWindow<'_>) -> Self {
        match window.latest().map(|r| r.activity_type) {
            Some(ActivityType::Nursing) => Self::Nursing,
            _ => Self::Bottle,
        }
    }
}

pub fn predict(ctx: &PredictionContext<'_>, config: &PredictionConfig) -> PredictionResult {
    let window = ActivityWindow::collect(
        ctx.activities,
        config.window_size,
        ActivityType::is_feeding,
        PredictedActivity::Feeding.as_str(),
    );
    let timing = Timing::compute(PredictedActivity::Feeding, &window, ctx, config);
    let (preference_weight, weights) =
        preference_weights(ctx.preferences, config.feeding_preference_weight);

    let mut suggestions = match FeedingMethod::of_latest(&window) {
        FeedingMethod::Bottle => bottle_suggestions(&window, &timing, ctx, weights),
        FeedingMethod::Nursing => nursing_suggestions(&window, &timing, ctx, weights),
    };
    suggestions.suggested_side = window
        .records()
        .iter()
        .find_map(|r| r.nursing_side())
        .map(|side| side.opposite());

    assemble(
        PredictedActivity::Feeding,
        &window,
        timing,
        suggestions,
        preference_weight,
        config,
    )
}

fn bottle_suggestions(
    window: &ActivityWindow<'_>,
    timing: &Timing,
    ctx: &PredictionContext<'_>,
    weights: BlendWeights,
) -> Suggestions {
    let recent = timing.observed(window.mean_of(bottle_amount));
    let custom = ctx.preferences.and_then(|p| p.feeding_amount_ml());
    let age_based = tables::bottle_amount_ml(timing.age_in_days).medium;

    let volume_blend = blend(&BlendInput::with_weights(
        Some(age_based),
        recent,
        custom,
        weights,
    ));
    Suggestions {
        suggested_volume: round_suggestion(&volume_blend),
        volume_blend,
        suggested_duration: None,
        duration_blend: BlendResult::no_data(),
        suggested_side: None,
    }
}

/// Nursing volume is not blended: it is estimated from the suggested
/// duration and the age-based transfer rate.
fn nursing_suggestions(
    window: &ActivityWindow<'_>,
    timing: &Timing,
    ctx: &PredictionContext<'_>,
    weights: BlendWeights,
) -> Suggestions {
    let recent = timing.observed(window.mean_of(nursing_duration));
    let custom = ctx.preferences.and_then(|p| p.nursing_duration_minutes());
    let age_based = tables::nursing_duration_minutes(timing.age_in_days).medium;

    let duration_blend = blend(&BlendInput::with_weights(
        Some(age_based),
        recent,
        custom,
        weights,
    ));
    let suggested_duration = round_suggestion(&duration_blend);

    let volume_blend = match suggested_duration {
        Some(minutes) => BlendResult {
            value: Some(tables::estimate_nursing_volume(minutes, timing.age_in_days)),
            source: format!("nursing estimate ({minutes} min)"),
        },
        None => BlendResult::no_data(),
    };
    Suggestions {
        suggested_volume: round_suggestion(&volume_blend),
        volume_blend,
        suggested_duration,
        duration_blend,
        suggested_side: None,
    }
}

fn bottle_amount(record: &ActivityRecord) -> Option<f64> {
    (record.activity_type == ActivityType::Bottle)
        .then_some(record.amount_ml)
        .flatten()
}

fn nursing_duration(record: &ActivityRecord) -> Option<f64> {
    (record.activity_type == ActivityType::Nursing)
        .then(|| record.effective_duration_minutes())
        .flatten()
}
