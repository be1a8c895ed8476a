use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Every kind of caregiving event the app can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Bottle,
    Nursing,
    Solids,
    Sleep,
    Diaper,
    Pumping,
    Bath,
    Medicine,
    Temperature,
    TummyTime,
    Growth,
    Potty,
    DoctorVisit,
}

impl ActivityType {
    /// All variants in declaration order.
    pub const ALL: [ActivityType; 13] = [
        Self::Bottle,
        Self::Nursing,
        Self::Solids,
        Self::Sleep,
        Self::Diaper,
        Self::Pumping,
        Self::Bath,
        Self::Medicine,
        Self::Temperature,
        Self::TummyTime,
        Self::Growth,
        Self::Potty,
        Self::DoctorVisit,
    ];

    /// Milk feedings consumed by the feeding predictor.
    /// Solids are logged but never predicted.
    pub fn is_feeding(self) -> bool {
        matches!(self, Self::Bottle | Self::Nursing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bottle => "bottle",
            Self::Nursing => "nursing",
            Self::Solids => "solids",
            Self::Sleep => "sleep",
            Self::Diaper => "diaper",
            Self::Pumping => "pumping",
            Self::Bath => "bath",
            Self::Medicine => "medicine",
            Self::Temperature => "temperature",
            Self::TummyTime => "tummy_time",
            Self::Growth => "growth",
            Self::Potty => "potty",
            Self::DoctorVisit => "doctor_visit",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bottle_and_nursing_are_feedings() {
        let feedings: Vec<_> = ActivityType::ALL
            .iter()
            .filter(|t| t.is_feeding())
            .collect();
        assert_eq!(feedings, vec![&ActivityType::Bottle, &ActivityType::Nursing]);
    }

    #[test]
    fn as_str_matches_serde_name() {
        for t in ActivityType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }
}
