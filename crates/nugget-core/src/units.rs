//! Volume conversion and age helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::ML_PER_OZ;

/// Display unit chosen by the parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Ml,
    Oz,
}

/// Round to the nearest 0.5.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Ounces to whole millilitres.
pub fn oz_to_ml(oz: f64) -> f64 {
    (oz * ML_PER_OZ).round()
}

/// Millilitres to ounces, rounded to the nearest half ounce.
pub fn ml_to_oz(ml: f64) -> f64 {
    round_to_half(ml_to_oz_exact(ml))
}

pub fn ml_to_oz_exact(ml: f64) -> f64 {
    ml / ML_PER_OZ
}

/// "120 ml", "4 oz", "4.5 oz".
pub fn format_volume(ml: f64, unit: VolumeUnit) -> String {
    match unit {
        VolumeUnit::Ml => format!("{} ml", ml.round()),
        VolumeUnit::Oz => {
            let oz = ml_to_oz(ml);
            if oz.fract() == 0.0 {
                format!("{oz:.0} oz")
            } else {
                format!("{oz:.1} oz")
            }
        }
    }
}

/// Whole days since birth. `None` without a birth date; a birth date in the
/// future counts as day 0.
pub fn baby_age_days(birth_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    birth_date.map(|birth| (now - birth).num_days().max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn oz_to_ml_rounds_to_whole_ml() {
        assert_eq!(oz_to_ml(1.0), 30.0);
        assert_eq!(oz_to_ml(4.0), 118.0);
    }

    #[test]
    fn ml_to_oz_rounds_to_half() {
        assert_eq!(ml_to_oz(30.0), 1.0);
        assert_eq!(ml_to_oz(75.0), 2.5);
        assert_eq!(ml_to_oz(240.0), 8.0);
    }

    #[test]
    fn format_volume_units() {
        assert_eq!(format_volume(120.0, VolumeUnit::Ml), "120 ml");
        assert_eq!(format_volume(118.0, VolumeUnit::Oz), "4 oz");
        assert_eq!(format_volume(133.0, VolumeUnit::Oz), "4.5 oz");
    }

    #[test]
    fn age_in_days() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        assert_eq!(baby_age_days(None, now), None);
        assert_eq!(baby_age_days(Some(now - Duration::days(10)), now), Some(10));
        assert_eq!(baby_age_days(Some(now - Duration::hours(30)), now), Some(1));
        assert_eq!(baby_age_days(Some(now + Duration::days(3)), now), Some(0));
    }
}
