//! Pumping predictor: blends both the expected output volume and session length.

use nugget_core::activity::{ActivityDetails, ActivityRecord, ActivityType};
use nugget_core::config::PredictionConfig;
use nugget_core::models::{PredictedActivity, PredictionResult};
use nugget_core::traits::PredictionContext;

use super::{assemble, preference_weights, round_suggestion, ActivityWindow, Suggestions, Timing};
use crate::blend::{blend, BlendInput};
use crate::tables;

pub fn predict(ctx: &PredictionContext<'_>, config: &PredictionConfig) -> PredictionResult {
    let window = ActivityWindow::collect(
        ctx.activities,
        config.window_size,
        |t| t == ActivityType::Pumping,
        PredictedActivity::Pumping.as_str(),
    );
    let timing = Timing::compute(PredictedActivity::Pumping, &window, ctx, config);
    let (preference_weight, weights) =
        preference_weights(ctx.preferences, config.pumping_preference_weight);

    let volume_blend = blend(&BlendInput::with_weights(
        Some(tables::pumping_amount_ml(timing.age_in_days).medium),
        timing.observed(window.mean_of(pumped_amount)),
        ctx.preferences.and_then(|p| p.pumping_amount_ml()),
        weights,
    ));
    let duration_blend = blend(&BlendInput::with_weights(
        Some(tables::pumping_duration_minutes(timing.age_in_days).medium),
        timing.observed(window.mean_of(|r| r.duration_minutes)),
        ctx.preferences.and_then(|p| p.pumping_duration_minutes()),
        weights,
    ));

    let suggestions = Suggestions {
        suggested_volume: round_suggestion(&volume_blend),
        suggested_duration: round_suggestion(&duration_blend),
        volume_blend,
        duration_blend,
        suggested_side: None,
    };
    assemble(
        PredictedActivity::Pumping,
        &window,
        timing,
        suggestions,
        preference_weight,
        config,
    )
}

/// Total output: the record's amount, or the sum of per-side amounts.
fn pumped_amount(record: &ActivityRecord) -> Option<f64> {
    if record.amount_ml.is_some() {
        return record.amount_ml;
    }
    match &record.details {
        Some(ActivityDetails::Pumping { left_ml, right_ml }) if left_ml.is_some() || right_ml.is_some() => {
            Some(left_ml.unwrap_or(0.0) + right_ml.unwrap_or(0.0))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn per_side_amounts_are_summed() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let record = ActivityRecord::new("p", ActivityType::Pumping, at).with_details(
            ActivityDetails::Pumping {
                left_ml: Some(40.0),
                right_ml: Some(35.0),
            },
        );
        assert_eq!(pumped_amount(&record), Some(75.0));
        assert_eq!(pumped_amount(&record.clone().with_amount(90.0)), Some(90.0));
    }
}
