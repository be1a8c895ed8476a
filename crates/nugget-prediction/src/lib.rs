//! # nugget-prediction
//!
//! Next-event prediction for feeding, pumping, and sleep.
//!
//! Each prediction blends three sources:
//!
//! | Source | Origin |
//! |--------|--------|
//! | Age-based | Step tables keyed by baby age in days |
//! | Recent average | Mean of valid gaps (0–12 h) in the recent window |
//! | Last interval | The most recent gap, when valid |
//!
//! The blend weights depend on how many valid gaps exist (the confidence
//! tier). Suggested amounts and durations use a second blend over
//! custom preferences, recent observations, and age-based typical values.
//!
//! Every function here is pure: `now` is injected through
//! [`PredictionContext`](nugget_core::traits::PredictionContext).

pub mod blend;
pub mod display;
pub mod engine;
pub mod intervals;
pub mod predictors;
pub mod tables;

pub use blend::{blend, split_weights, BlendInput, BlendWeights};
pub use engine::{PredictionEngine, PredictionSummary};
pub use intervals::{calculate_intervals, IntervalStats};
pub use tables::TypicalRange;
