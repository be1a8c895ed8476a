use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct FeedingPreferences {
    pub amount_ml: Option<f64>,
    pub nursing_duration_minutes: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PumpingPreferences {
    pub amount_ml: Option<f64>,
    pub duration_minutes: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct SleepPreferences {
    pub duration_minutes: Option<f64>,
}

/// Per-baby user-entered overrides, blended against computed estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CustomPreferences {
    pub feeding: Option<FeedingPreferences>,
    pub pumping: Option<PumpingPreferences>,
    pub sleep: Option<SleepPreferences>,
    /// How strongly overrides dominate the blend, in [0, 1].
    pub preference_weight: Option<f64>,
}

impl CustomPreferences {
    /// Preference weight clamped to [0, 1], or `default` when unset or NaN.
    pub fn preference_weight_or(&self, default: f64) -> f64 {
        match self.preference_weight {
            Some(w) if !w.is_nan() => w.clamp(0.0, 1.0),
            _ => default,
        }
    }

    pub fn feeding_amount_ml(&self) -> Option<f64> {
        self.feeding.as_ref().and_then(|f| f.amount_ml)
    }

    pub fn nursing_duration_minutes(&self) -> Option<f64> {
        self.feeding.as_ref().and_then(|f| f.nursing_duration_minutes)
    }

    pub fn pumping_amount_ml(&self) -> Option<f64> {
        self.pumping.as_ref().and_then(|p| p.amount_ml)
    }

    pub fn pumping_duration_minutes(&self) -> Option<f64> {
        self.pumping.as_ref().and_then(|p| p.duration_minutes)
    }

    pub fn sleep_duration_minutes(&self) -> Option<f64> {
        self.sleep.as_ref().and_then(|s| s.duration_minutes)
    }

    /// Boundary check: the weight must lie in [0, 1] and overrides must be
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(w) = self.preference_weight {
            if !(0.0..=1.0).contains(&w) {
                return Err(ValidationError::InvalidPreferenceWeight { value: w });
            }
        }
        let overrides = [
            ("feeding.amount_ml", self.feeding_amount_ml()),
            ("feeding.nursing_duration_minutes", self.nursing_duration_minutes()),
            ("pumping.amount_ml", self.pumping_amount_ml()),
            ("pumping.duration_minutes", self.pumping_duration_minutes()),
            ("sleep.duration_minutes", self.sleep_duration_minutes()),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ValidationError::InvalidPreference {
                        field: field.to_string(),
                        value: v,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_falls_back_to_default() {
        let prefs = CustomPreferences::default();
        assert_eq!(prefs.preference_weight_or(0.4), 0.4);

        let nan = CustomPreferences {
            preference_weight: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(nan.preference_weight_or(0.3), 0.3);
    }

    #[test]
    fn weight_is_clamped() {
        let high = CustomPreferences {
            preference_weight: Some(1.7),
            ..Default::default()
        };
        assert_eq!(high.preference_weight_or(0.4), 1.0);

        let low = CustomPreferences {
            preference_weight: Some(-0.2),
            ..Default::default()
        };
        assert_eq!(low.preference_weight_or(0.4), 0.0);
    }

    #[test]
    fn nested_accessors() {
        let prefs = CustomPreferences {
            pumping: Some(PumpingPreferences {
                amount_ml: Some(110.0),
                duration_minutes: None,
            }),
            ..Default::default()
        };
        assert_eq!(prefs.pumping_amount_ml(), Some(110.0));
        assert_eq!(prefs.pumping_duration_minutes(), None);
        assert_eq!(prefs.feeding_amount_ml(), None);
    }

    #[test]
    fn validate_rejects_out_of_range_weight() {
        let prefs = CustomPreferences {
            preference_weight: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(
            prefs.validate(),
            Err(ValidationError::InvalidPreferenceWeight { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_override() {
        let prefs = CustomPreferences {
            sleep: Some(SleepPreferences {
                duration_minutes: Some(-30.0),
            }),
            ..Default::default()
        };
        assert!(prefs.validate().is_err());
    }
}
