// Single source of truth for all default values.

// --- Prediction ---
pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_MAX_VALID_GAP_HOURS: f64 = 12.0;
pub const DEFAULT_FEEDING_PREFERENCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_PUMPING_PREFERENCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_SLEEP_PREFERENCE_WEIGHT: f64 = 0.3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
