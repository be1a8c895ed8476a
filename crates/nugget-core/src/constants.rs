/// Nugget engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Millilitres in one US fluid ounce.
pub const ML_PER_OZ: f64 = 29.5735;

/// Share of the non-custom weight given to the age-based source.
/// Not user-configurable.
pub const AGE_BASED_SHARE: f64 = 0.33;

/// Share of the non-custom weight given to the recent-average source.
pub const RECENT_SHARE: f64 = 0.67;

/// Valid-gap count at which confidence moves from low to medium.
pub const MEDIUM_CONFIDENCE_MIN_SAMPLES: usize = 1;

/// Valid-gap count at which confidence moves from medium to high.
pub const HIGH_CONFIDENCE_MIN_SAMPLES: usize = 3;

/// Seconds in one hour, used for gap conversion.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
