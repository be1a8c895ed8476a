use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::activity_type::ActivityType;

/// Which breast a nursing session used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NursingSide {
    Left,
    Right,
    Both,
}

impl NursingSide {
    /// Infer the side from per-side durations.
    ///
    /// Only one positive duration names that side. Anything else
    /// (both positive, both zero, both absent) is `Both`.
    pub fn infer(left_minutes: Option<f64>, right_minutes: Option<f64>) -> Self {
        let left = left_minutes.is_some_and(|m| m > 0.0);
        let right = right_minutes.is_some_and(|m| m > 0.0);
        match (left, right) {
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            _ => Self::Both,
        }
    }

    /// The side to offer next. `Both` has no opposite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Both => Self::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BottleContents {
    Formula,
    BreastMilk,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SleepKind {
    Nap,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiaperKind {
    Wet,
    Dirty,
    Both,
}

/// Per-activity payload attached to a record.
/// Serialized as an internally tagged enum keyed by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityDetails {
    Nursing {
        side: Option<NursingSide>,
        left_minutes: Option<f64>,
        right_minutes: Option<f64>,
    },
    Bottle {
        contents: Option<BottleContents>,
    },
    Sleep {
        sleep_kind: Option<SleepKind>,
    },
    Diaper {
        kind: DiaperKind,
    },
    Pumping {
        left_ml: Option<f64>,
        right_ml: Option<f64>,
    },
    Temperature {
        celsius: f64,
    },
    Growth {
        weight_kg: Option<f64>,
        length_cm: Option<f64>,
        head_cm: Option<f64>,
    },
    Medicine {
        name: String,
        dose: Option<String>,
    },
}

impl ActivityDetails {
    /// The activity type this payload belongs to.
    pub fn activity_type(&self) -> ActivityType {
        match self {
            Self::Nursing { .. } => ActivityType::Nursing,
            Self::Bottle { .. } => ActivityType::Bottle,
            Self::Sleep { .. } => ActivityType::Sleep,
            Self::Diaper { .. } => ActivityType::Diaper,
            Self::Pumping { .. } => ActivityType::Pumping,
            Self::Temperature { .. } => ActivityType::Temperature,
            Self::Growth { .. } => ActivityType::Growth,
            Self::Medicine { .. } => ActivityType::Medicine,
        }
    }

    /// Every numeric field with its name, for finiteness checks at the boundary.
    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let pairs: Vec<(&'static str, Option<f64>)> = match self {
            Self::Nursing {
                left_minutes,
                right_minutes,
                ..
            } => vec![
                ("details.left_minutes", *left_minutes),
                ("details.right_minutes", *right_minutes),
            ],
            Self::Pumping { left_ml, right_ml } => vec![
                ("details.left_ml", *left_ml),
                ("details.right_ml", *right_ml),
            ],
            Self::Temperature { celsius } => vec![("details.celsius", Some(*celsius))],
            Self::Growth {
                weight_kg,
                length_cm,
                head_cm,
            } => vec![
                ("details.weight_kg", *weight_kg),
                ("details.length_cm", *length_cm),
                ("details.head_cm", *head_cm),
            ],
            Self::Bottle { .. } | Self::Sleep { .. } | Self::Diaper { .. } | Self::Medicine { .. } => {
                vec![]
            }
        };
        pairs
            .into_iter()
            .filter_map(|(name, v)| v.map(|v| (name, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_single_side() {
        assert_eq!(NursingSide::infer(Some(10.0), None), NursingSide::Left);
        assert_eq!(NursingSide::infer(Some(0.0), Some(7.0)), NursingSide::Right);
    }

    #[test]
    fn infer_ambiguous_defaults_to_both() {
        assert_eq!(NursingSide::infer(None, None), NursingSide::Both);
        assert_eq!(NursingSide::infer(Some(0.0), Some(0.0)), NursingSide::Both);
        assert_eq!(NursingSide::infer(Some(5.0), Some(8.0)), NursingSide::Both);
    }

    #[test]
    fn opposite_side() {
        assert_eq!(NursingSide::Left.opposite(), NursingSide::Right);
        assert_eq!(NursingSide::Right.opposite(), NursingSide::Left);
        assert_eq!(NursingSide::Both.opposite(), NursingSide::Both);
    }

    #[test]
    fn details_tagged_by_type() {
        let json = r#"{"type":"nursing","side":"left","left_minutes":12}"#;
        let details: ActivityDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.activity_type(), ActivityType::Nursing);
        assert!(matches!(
            details,
            ActivityDetails::Nursing {
                side: Some(NursingSide::Left),
                left_minutes: Some(m),
                right_minutes: None,
            } if m == 12.0
        ));
    }

    #[test]
    fn empty_bottle_details_parse() {
        let details: ActivityDetails = serde_json::from_str(r#"{"type":"bottle"}"#).unwrap();
        assert_eq!(details, ActivityDetails::Bottle { contents: None });
    }
}
