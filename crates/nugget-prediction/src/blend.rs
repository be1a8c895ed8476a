//! Weighted blending of custom, recent, and age-based estimates.
//!
//! Unavailable sources never count as zero: their weight is redistributed
//! proportionally across the sources that are present.

use nugget_core::constants::{AGE_BASED_SHARE, RECENT_SHARE};
use nugget_core::models::BlendResult;

/// Up to three candidate values with caller-supplied weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlendInput {
    pub age_based_value: Option<f64>,
    pub age_based_weight: f64,
    pub recent_value: Option<f64>,
    pub recent_weight: f64,
    pub custom_value: Option<f64>,
    pub custom_weight: f64,
}

impl BlendInput {
    /// Pair the three values with a weight split.
    pub fn with_weights(
        age_based_value: Option<f64>,
        recent_value: Option<f64>,
        custom_value: Option<f64>,
        weights: BlendWeights,
    ) -> Self {
        Self {
            age_based_value,
            age_based_weight: weights.age_based,
            recent_value,
            recent_weight: weights.recent,
            custom_value,
            custom_weight: weights.custom,
        }
    }
}

/// Weights for the amount/duration blends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub age_based: f64,
    pub recent: f64,
    pub custom: f64,
}

/// Split a preference weight into `(age-based, recent, custom)`.
///
/// The custom source gets `p`; the remaining `1 - p` is split 33/67
/// between age-based and recent.
pub fn split_weights(preference_weight: f64) -> BlendWeights {
    let p = if preference_weight.is_nan() {
        0.0
    } else {
        preference_weight.clamp(0.0, 1.0)
    };
    let rest = 1.0 - p;
    BlendWeights {
        age_based: rest * AGE_BASED_SHARE,
        recent: rest * RECENT_SHARE,
        custom: p,
    }
}

/// Display order and names used in the `source` string.
const CUSTOM: &str = "custom";
const RECENT: &str = "recent";
const AGE_BASED: &str = "age-based";

/// Blend the available sources into one raw value.
///
/// - Non-finite values count as unavailable; negative or NaN weights as 0.
/// - Available weights are renormalized to sum to 1. If they are all 0,
///   the available sources share equally.
/// - Sources left with zero weight are dropped from the result.
/// - The value is not rounded; callers round to their unit.
pub fn blend(input: &BlendInput) -> BlendResult {
    let candidates = [
        (CUSTOM, input.custom_value, input.custom_weight),
        (RECENT, input.recent_value, input.recent_weight),
        (AGE_BASED, input.age_based_value, input.age_based_weight),
    ];

    let available: Vec<(&str, f64, f64)> = candidates
        .iter()
        .filter_map(|&(name, value, weight)| {
            value
                .filter(|v| v.is_finite())
                .map(|v| (name, v, sanitize_weight(weight)))
        })
        .collect();

    if available.is_empty() {
        return BlendResult::no_data();
    }

    let total: f64 = available.iter().map(|(_, _, w)| w).sum();
    let equal_share = 1.0 / available.len() as f64;
    let contributing: Vec<(&str, f64, f64)> = available
        .into_iter()
        .map(|(name, v, w)| {
            let normalized = if total > 0.0 { w / total } else { equal_share };
            (name, v, normalized)
        })
        .filter(|(_, _, w)| *w > 0.0)
        .collect();

    if let [(name, value, _)] = contributing.as_slice() {
        return BlendResult {
            value: Some(*value),
            source: format!("{name} only"),
        };
    }

    let value: f64 = contributing.iter().map(|(_, v, w)| v * w).sum();
    let source = contributing
        .iter()
        .map(|(name, _, w)| format!("{name} {}%", (w * 100.0).round() as i64))
        .collect::<Vec<_>>()
        .join(" + ");

    BlendResult {
        value: Some(value),
        source,
    }
}

fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_nan() || weight < 0.0 {
        0.0
    } else {
        weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_fixed_ratio() {
        let w = split_weights(0.4);
        assert!((w.age_based - 0.198).abs() < 1e-12);
        assert!((w.recent - 0.402).abs() < 1e-12);
        assert_eq!(w.custom, 0.4);
        assert!((w.age_based + w.recent + w.custom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn split_clamps_weight() {
        assert_eq!(split_weights(1.5).custom, 1.0);
        assert_eq!(split_weights(-1.0).custom, 0.0);
        assert_eq!(split_weights(f64::NAN).custom, 0.0);
    }

    #[test]
    fn zero_weight_source_is_dropped() {
        let result = blend(&BlendInput {
            age_based_value: Some(60.0),
            age_based_weight: 0.5,
            recent_value: Some(90.0),
            recent_weight: 0.0,
            custom_value: None,
            custom_weight: 0.5,
        });
        assert_eq!(result.value, Some(60.0));
        assert_eq!(result.source, "age-based only");
    }

    #[test]
    fn all_zero_weights_share_equally() {
        let result = blend(&BlendInput {
            age_based_value: Some(60.0),
            age_based_weight: 0.0,
            recent_value: Some(90.0),
            recent_weight: 0.0,
            custom_value: None,
            custom_weight: 0.0,
        });
        assert_eq!(result.value, Some(75.0));
        assert_eq!(result.source, "recent 50% + age-based 50%");
    }

    #[test]
    fn non_finite_value_is_unavailable() {
        let result = blend(&BlendInput {
            age_based_value: Some(60.0),
            age_based_weight: 0.3,
            recent_value: Some(f64::NAN),
            recent_weight: 0.7,
            ..Default::default()
        });
        assert_eq!(result.value, Some(60.0));
        assert_eq!(result.source, "age-based only");
    }
}
