pub mod blend_result;
pub mod confidence;
pub mod pattern_entry;
pub mod prediction_result;

pub use blend_result::BlendResult;
pub use confidence::{ConfidenceLevel, TierWeights};
pub use pattern_entry::PatternEntry;
pub use prediction_result::{CalculationDetails, PredictedActivity, PredictionResult};
