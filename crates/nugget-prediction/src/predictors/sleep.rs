//! Sleep predictor: next nap time and a blended nap length; no volume.

use nugget_core::activity::ActivityType;
use nugget_core::config::PredictionConfig;
use nugget_core::models::{BlendResult, PredictedActivity, PredictionResult};
use nugget_core::traits::PredictionContext;

use super::{assemble, preference_weights, round_suggestion, ActivityWindow, Suggestions, Timing};
use crate::blend::{blend, BlendInput};
use crate::tables;

pub fn predict(ctx: &PredictionContext<'_>, config: &PredictionConfig) -> PredictionResult {
    let window = ActivityWindow::collect(
        ctx.activities,
        config.window_size,
        |t| t == ActivityType::Sleep,
        PredictedActivity::Sleep.as_str(),
    );
    let timing = Timing::compute(PredictedActivity::Sleep, &window, ctx, config);
    let (preference_weight, weights) =
        preference_weights(ctx.preferences, config.sleep_preference_weight);

    let duration_blend = blend(&BlendInput::with_weights(
        Some(tables::sleep_duration_minutes(timing.age_in_days).medium),
        timing.observed(window.mean_of(|r| r.duration_minutes)),
        ctx.preferences.and_then(|p| p.sleep_duration_minutes()),
        weights,
    ));

    let suggestions = Suggestions {
        suggested_volume: None,
        volume_blend: BlendResult::no_data(),
        suggested_duration: round_suggestion(&duration_blend),
        duration_blend,
        suggested_side: None,
    };
    assemble(
        PredictedActivity::Sleep,
        &window,
        timing,
        suggestions,
        preference_weight,
        config,
    )
}
