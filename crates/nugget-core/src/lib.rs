//! # nugget-core
//!
//! Foundation crate for the Nugget prediction engine.
//! Defines activity records, custom preferences, prediction output models,
//! traits, errors, config, unit helpers, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod activity;
pub mod boundary;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;
pub mod units;

// Re-export the most commonly used types at the crate root.
pub use activity::{ActivityDetails, ActivityRecord, ActivityType, CustomPreferences, NursingSide};
pub use config::NuggetConfig;
pub use errors::{NuggetError, NuggetResult};
pub use models::{
    BlendResult, CalculationDetails, ConfidenceLevel, PatternEntry, PredictedActivity,
    PredictionResult, TierWeights,
};
