//! Short labels for prediction cards.

use chrono::{DateTime, Utc};
use nugget_core::activity::NursingSide;
use nugget_core::models::{ConfidenceLevel, PredictionResult};
use nugget_core::units::{format_volume, VolumeUnit};

/// `"now"`, `"in 45 min"`, `"in 2h 5m"`, `"overdue by 10 min"`.
///
/// Anything under a minute either way reads as `"now"`.
pub fn time_until_label(next: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (next - now).num_minutes();
    match minutes {
        0 => "now".to_string(),
        m if m > 0 => format!("in {}", span(m)),
        m => format!("overdue by {}", span(-m)),
    }
}

fn span(minutes: i64) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub fn confidence_label(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "Based on an established pattern",
        ConfidenceLevel::Medium => "Based on recent activity",
        ConfidenceLevel::Low => "Based on age",
    }
}

/// e.g. `"4 oz"`, `"90 ml, 15 min, start left"`, or empty when nothing
/// is suggested.
pub fn suggestion_label(result: &PredictionResult, unit: VolumeUnit) -> String {
    let mut parts = Vec::new();
    if let Some(ml) = result.suggested_volume {
        parts.push(format_volume(ml, unit));
    }
    if let Some(minutes) = result.suggested_duration {
        parts.push(format!("{minutes} min"));
    }
    match result.suggested_side {
        Some(NursingSide::Left) => parts.push("start left".to_string()),
        Some(NursingSide::Right) => parts.push("start right".to_string()),
        Some(NursingSide::Both) | None => {}
    }
    parts.join(", ")
}
