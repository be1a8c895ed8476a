//! Per-activity predictors and the pipeline they share.
//!
//! Every predictor:
//! 1. Collects a window: relevant types, no scheduled entries, newest first, capped.
//! 2. Computes age, gap statistics, confidence tier, interval and next time.
//! 3. Blends a suggested volume and/or duration.
//! 4. Assembles a [`PredictionResult`].

pub mod feeding;
pub mod pumping;
pub mod sleep;

use chrono::{DateTime, Utc};
use nugget_core::activity::{ActivityRecord, ActivityType, CustomPreferences, NursingSide};
use nugget_core::config::PredictionConfig;
use nugget_core::models::{
    BlendResult, CalculationDetails, ConfidenceLevel, PatternEntry, PredictedActivity,
    PredictionResult, TierWeights,
};
use nugget_core::tracing_setup::events;
use nugget_core::traits::PredictionContext;
use nugget_core::units::baby_age_days;

use crate::blend::{split_weights, BlendWeights};
use crate::intervals::{self, IntervalStats};
use crate::tables;

/// Newest-first window of same-kind records.
pub struct ActivityWindow<'a> {
    records: Vec<&'a ActivityRecord>,
}

impl<'a> ActivityWindow<'a> {
    /// Keep records whose type passes `include`, drop scheduled entries,
    /// sort newest first (ties by id), and keep at most `window_size`.
    pub fn collect(
        activities: &'a [ActivityRecord],
        window_size: usize,
        include: impl Fn(ActivityType) -> bool,
        label: &str,
    ) -> Self {
        let matching: Vec<&ActivityRecord> = activities
            .iter()
            .filter(|a| include(a.activity_type))
            .collect();
        let scheduled = matching.iter().filter(|a| a.is_scheduled).count();

        let mut records: Vec<&ActivityRecord> =
            matching.into_iter().filter(|a| !a.is_scheduled).collect();
        records.sort_by(|a, b| {
            b.start_time
                .cmp(&a.start_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        records.truncate(window_size);

        events::window_filtered(label, activities.len(), records.len(), scheduled);
        Self { records }
    }

    pub fn latest(&self) -> Option<&'a ActivityRecord> {
        self.records.first().copied()
    }

    /// Newest first.
    pub fn records(&self) -> &[&'a ActivityRecord] {
        &self.records
    }

    pub fn times_desc(&self) -> Vec<DateTime<Utc>> {
        self.records.iter().map(|r| r.start_time).collect()
    }

    /// Mean of `field` across the window, skipping records without it.
    pub fn mean_of(&self, field: impl Fn(&ActivityRecord) -> Option<f64>) -> Option<f64> {
        let values: Vec<f64> = self
            .records
            .iter()
            .filter_map(|&r| field(r))
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// Oldest-first observations paired with their gaps.
    pub fn pattern(&self, stats: &IntervalStats, max_valid_gap_hours: f64) -> Vec<PatternEntry> {
        self.records
            .iter()
            .rev()
            .zip(stats.gaps.iter())
            .map(|(record, gap)| PatternEntry {
                start_time: record.start_time,
                amount_ml: record.amount_ml,
                duration_minutes: record.effective_duration_minutes(),
                interval_hours: *gap,
                is_valid_interval: gap
                    .is_some_and(|h| intervals::is_valid_interval(h, max_valid_gap_hours)),
            })
            .collect()
    }
}

/// Timing half of a prediction: when the next event is due and why.
pub struct Timing {
    pub age_in_days: Option<i64>,
    pub age_based_interval: f64,
    pub stats: IntervalStats,
    pub confidence: ConfidenceLevel,
    pub weights: TierWeights,
    pub interval_hours: f64,
    pub next_event_time: DateTime<Utc>,
    pub last_event_time: Option<DateTime<Utc>>,
}

impl Timing {
    pub fn compute(
        activity: PredictedActivity,
        window: &ActivityWindow<'_>,
        ctx: &PredictionContext<'_>,
        config: &PredictionConfig,
    ) -> Self {
        let age_in_days = baby_age_days(ctx.birth_date, ctx.now);
        let age_based_interval = tables::interval_hours(activity, age_in_days);
        let stats = IntervalStats::from_times(&window.times_desc(), config.max_valid_gap_hours);
        let confidence = stats.confidence();
        let (interval_hours, weights) = intervals::predicted_interval(age_based_interval, &stats);

        if confidence == ConfidenceLevel::Low {
            events::age_based_fallback(activity.as_str(), age_in_days);
        }

        let last_event_time = window.latest().map(|r| r.start_time);
        let anchor = last_event_time.unwrap_or(ctx.now);

        Self {
            age_in_days,
            age_based_interval,
            stats,
            confidence,
            weights,
            interval_hours,
            next_event_time: intervals::next_event_time(anchor, interval_hours),
            last_event_time,
        }
    }

    /// Observed amounts and durations are ignored in the low tier.
    pub fn observed(&self, value: Option<f64>) -> Option<f64> {
        if self.confidence == ConfidenceLevel::Low {
            None
        } else {
            value
        }
    }
}

/// Preference weight for this activity, split into blend weights.
pub fn preference_weights(
    preferences: Option<&CustomPreferences>,
    default_weight: f64,
) -> (f64, BlendWeights) {
    let weight = preferences.map_or(default_weight, |p| p.preference_weight_or(default_weight));
    (weight, split_weights(weight))
}

/// Whole-unit rounding applied to every suggested amount and duration.
pub fn round_suggestion(blend: &BlendResult) -> Option<f64> {
    blend.value.map(f64::round)
}

/// Suggested values attached to the timing.
pub struct Suggestions {
    pub volume_blend: BlendResult,
    pub suggested_volume: Option<f64>,
    pub duration_blend: BlendResult,
    pub suggested_duration: Option<f64>,
    pub suggested_side: Option<NursingSide>,
}

/// Build the final result from its two halves.
pub fn assemble(
    activity: PredictedActivity,
    window: &ActivityWindow<'_>,
    timing: Timing,
    suggestions: Suggestions,
    preference_weight: f64,
    config: &PredictionConfig,
) -> PredictionResult {
    let recent_pattern = window.pattern(&timing.stats, config.max_valid_gap_hours);
    let sample_count = timing.stats.sample_count();

    PredictionResult {
        activity,
        next_event_time: timing.next_event_time,
        confidence_level: timing.confidence,
        interval_hours: timing.interval_hours,
        average_interval_hours: timing.stats.average_interval,
        last_event_time: timing.last_event_time,
        last_event_amount: window.latest().and_then(|r| r.amount_ml),
        recent_pattern,
        suggested_volume: suggestions.suggested_volume,
        suggested_duration: suggestions.suggested_duration,
        volume_blend: suggestions.volume_blend,
        duration_blend: suggestions.duration_blend,
        suggested_side: suggestions.suggested_side,
        calculation_details: CalculationDetails {
            age_in_days: timing.age_in_days,
            age_based_interval: timing.age_based_interval,
            recent_average_interval: timing.stats.average_interval,
            last_interval: timing.stats.last_interval,
            weights: timing.weights,
            sample_count,
            preference_weight,
        },
    }
}
