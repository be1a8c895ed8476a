//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::PredictionResult;

/// Log a completed prediction.
pub fn prediction_computed(result: &PredictionResult) {
    tracing::debug!(
        event = "prediction_computed",
        activity = %result.activity,
        confidence = %result.confidence_level,
        sample_count = result.calculation_details.sample_count,
        interval_hours = result.interval_hours,
        next_event_time = %result.next_event_time,
        "prediction computed"
    );
}

/// Log how many records survived window filtering.
pub fn window_filtered(activity: &str, input: usize, kept: usize, scheduled_skipped: usize) {
    tracing::trace!(
        event = "window_filtered",
        activity = %activity,
        input = input,
        kept = kept,
        scheduled_skipped = scheduled_skipped,
        "activity window filtered"
    );
}

/// Log a prediction that fell back to age-based defaults only.
pub fn age_based_fallback(activity: &str, age_in_days: Option<i64>) {
    tracing::debug!(
        event = "age_based_fallback",
        activity = %activity,
        age_in_days = ?age_in_days,
        "no valid intervals, using age-based defaults"
    );
}
