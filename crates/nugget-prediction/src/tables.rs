//! Age-bucketed defaults.
//!
//! Every table is a step function over age in days. A missing age maps to
//! the "established" tier of each table rather than being interpolated.
//! Values are domain heuristics; do not assume monotonicity across buckets.

use nugget_core::models::PredictedActivity;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Typical `{low, medium, high}` values for one age bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TypicalRange {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl TypicalRange {
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }
}

/// Step table: `steps` holds `(max_age_inclusive, value)` in ascending order,
/// `beyond` covers every older age, `established` covers a missing age.
struct StepTable<T: 'static> {
    steps: &'static [(i64, T)],
    beyond: T,
    established: T,
}

impl<T: Copy> StepTable<T> {
    fn lookup(&self, age_in_days: Option<i64>) -> T {
        let Some(age) = age_in_days else {
            return self.established;
        };
        self.steps
            .iter()
            .find(|(max_age, _)| age <= *max_age)
            .map(|(_, value)| *value)
            .unwrap_or(self.beyond)
    }
}

// --- Intervals (hours) ---

const FEEDING_INTERVAL: StepTable<f64> = StepTable {
    steps: &[(7, 2.5), (30, 3.0), (90, 3.5), (180, 4.0)],
    beyond: 4.5,
    established: 3.5,
};

const PUMPING_INTERVAL: StepTable<f64> = StepTable {
    steps: &[(7, 2.5), (30, 3.0), (90, 3.5), (180, 4.0)],
    beyond: 5.0,
    established: 3.5,
};

const SLEEP_INTERVAL: StepTable<f64> = StepTable {
    steps: &[(30, 2.0), (90, 2.5), (180, 3.0), (365, 4.0)],
    beyond: 6.0,
    established: 3.0,
};

// --- Amounts (ml) ---

const BOTTLE_AMOUNT: StepTable<TypicalRange> = StepTable {
    steps: &[
        (2, TypicalRange::new(5.0, 10.0, 15.0)),
        (6, TypicalRange::new(20.0, 30.0, 45.0)),
        (13, TypicalRange::new(45.0, 60.0, 75.0)),
        (30, TypicalRange::new(60.0, 75.0, 90.0)),
        (60, TypicalRange::new(90.0, 105.0, 120.0)),
        (180, TypicalRange::new(120.0, 150.0, 180.0)),
    ],
    beyond: TypicalRange::new(180.0, 210.0, 240.0),
    established: TypicalRange::new(90.0, 105.0, 120.0),
};

const PUMPING_AMOUNT: StepTable<TypicalRange> = StepTable {
    steps: &[
        (3, TypicalRange::new(5.0, 10.0, 20.0)),
        (14, TypicalRange::new(30.0, 60.0, 90.0)),
        (42, TypicalRange::new(60.0, 90.0, 120.0)),
    ],
    beyond: TypicalRange::new(90.0, 120.0, 150.0),
    established: TypicalRange::new(60.0, 90.0, 120.0),
};

// --- Durations (minutes) ---

const NURSING_DURATION: StepTable<TypicalRange> = StepTable {
    steps: &[
        (30, TypicalRange::new(15.0, 20.0, 30.0)),
        (90, TypicalRange::new(10.0, 15.0, 20.0)),
    ],
    beyond: TypicalRange::new(5.0, 10.0, 15.0),
    established: TypicalRange::new(10.0, 15.0, 20.0),
};

const PUMPING_DURATION: StepTable<TypicalRange> = StepTable {
    steps: &[(14, TypicalRange::new(10.0, 15.0, 20.0))],
    beyond: TypicalRange::new(15.0, 20.0, 25.0),
    established: TypicalRange::new(15.0, 20.0, 25.0),
};

const SLEEP_DURATION: StepTable<TypicalRange> = StepTable {
    steps: &[
        (30, TypicalRange::new(30.0, 60.0, 120.0)),
        (90, TypicalRange::new(45.0, 75.0, 120.0)),
        (180, TypicalRange::new(45.0, 90.0, 120.0)),
    ],
    beyond: TypicalRange::new(60.0, 90.0, 150.0),
    established: TypicalRange::new(45.0, 90.0, 120.0),
};

// --- Nursing milk transfer (ml per minute) ---

const NURSING_TRANSFER_RATE: StepTable<f64> = StepTable {
    steps: &[(3, 1.0), (14, 2.5), (60, 4.0)],
    beyond: 5.5,
    established: 4.0,
};

/// Expected hours between events of this kind.
pub fn interval_hours(activity: PredictedActivity, age_in_days: Option<i64>) -> f64 {
    match activity {
        PredictedActivity::Feeding => FEEDING_INTERVAL.lookup(age_in_days),
        PredictedActivity::Pumping => PUMPING_INTERVAL.lookup(age_in_days),
        PredictedActivity::Sleep => SLEEP_INTERVAL.lookup(age_in_days),
    }
}

pub fn bottle_amount_ml(age_in_days: Option<i64>) -> TypicalRange {
    BOTTLE_AMOUNT.lookup(age_in_days)
}

pub fn pumping_amount_ml(age_in_days: Option<i64>) -> TypicalRange {
    PUMPING_AMOUNT.lookup(age_in_days)
}

pub fn nursing_duration_minutes(age_in_days: Option<i64>) -> TypicalRange {
    NURSING_DURATION.lookup(age_in_days)
}

pub fn pumping_duration_minutes(age_in_days: Option<i64>) -> TypicalRange {
    PUMPING_DURATION.lookup(age_in_days)
}

/// Typical nap length.
pub fn sleep_duration_minutes(age_in_days: Option<i64>) -> TypicalRange {
    SLEEP_DURATION.lookup(age_in_days)
}

pub fn nursing_transfer_rate(age_in_days: Option<i64>) -> f64 {
    NURSING_TRANSFER_RATE.lookup(age_in_days)
}

/// Estimated milk volume for a nursing session of `duration_minutes`.
///
/// Clamped to `[0, high bottle amount]` for the age, so long sessions
/// never suggest more than a large bottle.
pub fn estimate_nursing_volume(duration_minutes: f64, age_in_days: Option<i64>) -> f64 {
    let ceiling = bottle_amount_ml(age_in_days).high;
    (duration_minutes * nursing_transfer_rate(age_in_days)).clamp(0.0, ceiling)
}
