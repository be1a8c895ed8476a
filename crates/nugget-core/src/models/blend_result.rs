use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Weighted combination of custom, recent and age-based estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BlendResult {
    /// Raw weighted value; `None` when no source was available.
    pub value: Option<f64>,
    /// Which sources contributed, e.g. `"recent 67% + age-based 33%"`.
    pub source: String,
}

impl BlendResult {
    pub const NO_DATA: &'static str = "no data";

    pub fn no_data() -> Self {
        Self {
            value: None,
            source: Self::NO_DATA.to_string(),
        }
    }
}
