//! Inter-event gaps and the confidence-weighted interval.

use chrono::{DateTime, Duration, Utc};
use nugget_core::constants::SECONDS_PER_HOUR;
use nugget_core::models::{ConfidenceLevel, TierWeights};

/// Gaps between consecutive events, in hours.
///
/// `desc_times` must be newest first; it is not re-sorted. The output is
/// oldest first, and its first element is always `None`.
pub fn calculate_intervals(desc_times: &[DateTime<Utc>]) -> Vec<Option<f64>> {
    let ascending: Vec<&DateTime<Utc>> = desc_times.iter().rev().collect();
    ascending
        .iter()
        .enumerate()
        .map(|(i, time)| {
            if i == 0 {
                None
            } else {
                Some(hours_between(*ascending[i - 1], **time))
            }
        })
        .collect()
}

fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR
}

/// A gap counts toward the average only inside `(0, max_valid_gap_hours)`.
/// Zero or negative gaps are duplicates or clock skew; long gaps are absences.
pub fn is_valid_interval(hours: f64, max_valid_gap_hours: f64) -> bool {
    hours > 0.0 && hours < max_valid_gap_hours
}

/// Gap statistics over one activity window.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalStats {
    /// Every gap, oldest first, led by `None`.
    pub gaps: Vec<Option<f64>>,
    /// Gaps that passed [`is_valid_interval`], oldest first.
    pub valid_gaps: Vec<f64>,
    pub average_interval: Option<f64>,
    /// The newest gap, when it is valid.
    pub last_interval: Option<f64>,
}

impl IntervalStats {
    pub fn from_times(desc_times: &[DateTime<Utc>], max_valid_gap_hours: f64) -> Self {
        let gaps = calculate_intervals(desc_times);
        let valid_gaps: Vec<f64> = gaps
            .iter()
            .flatten()
            .copied()
            .filter(|h| is_valid_interval(*h, max_valid_gap_hours))
            .collect();

        let average_interval = if valid_gaps.is_empty() {
            None
        } else {
            Some(valid_gaps.iter().sum::<f64>() / valid_gaps.len() as f64)
        };

        let last_interval = gaps
            .last()
            .copied()
            .flatten()
            .filter(|h| is_valid_interval(*h, max_valid_gap_hours));

        Self {
            gaps,
            valid_gaps,
            average_interval,
            last_interval,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.valid_gaps.len()
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_sample_count(self.sample_count())
    }
}

/// Tier-weighted interval in hours, plus the weights used.
///
/// A missing recent average or last interval falls back to the age-based value.
pub fn predicted_interval(age_based_interval: f64, stats: &IntervalStats) -> (f64, TierWeights) {
    let weights = stats.confidence().weights();
    let recent = stats.average_interval.unwrap_or(age_based_interval);
    let last = stats.last_interval.unwrap_or(age_based_interval);
    let interval = age_based_interval * weights.age_based
        + recent * weights.recent_average
        + last * weights.last_interval;
    (interval, weights)
}

/// `anchor + interval`, at whole-minute granularity in UTC.
///
/// Saturates at the latest representable instant instead of overflowing.
pub fn next_event_time(anchor: DateTime<Utc>, interval_hours: f64) -> DateTime<Utc> {
    let minutes = (interval_hours * 60.0).round() as i64;
    Duration::try_minutes(minutes)
        .and_then(|delta| anchor.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
