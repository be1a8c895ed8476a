/// Input that satisfies the wire schema but violates record invariants.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("activity id must not be empty")]
    EmptyId,

    #[error("activity {id}: amount_ml must be non-negative, got {value}")]
    NegativeAmount { id: String, value: f64 },

    #[error("activity {id}: duration_minutes must be non-negative, got {value}")]
    NegativeDuration { id: String, value: f64 },

    #[error("activity {id}: field {field} is not a finite number")]
    NonFiniteValue { id: String, field: String },

    #[error("activity {id}: {details_type} details attached to a {activity_type} record")]
    DetailsMismatch {
        id: String,
        activity_type: String,
        details_type: String,
    },

    #[error("preference weight must be within [0, 1], got {value}")]
    InvalidPreferenceWeight { value: f64 },

    #[error("preference {field} must be a finite non-negative number, got {value}")]
    InvalidPreference { field: String, value: f64 },
}
