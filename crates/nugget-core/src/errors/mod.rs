//! Error handling for Nugget.
//! One error enum per concern, `thiserror` only, aggregated into `NuggetError`.
//!
//! Prediction itself is total and never returns these; they surface only
//! at the parsing and configuration boundaries.

pub mod config_error;
pub mod nugget_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use nugget_error::{NuggetError, NuggetResult};
pub use validation_error::ValidationError;
