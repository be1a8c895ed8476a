//! Parse-and-validate entry points for data arriving from the activity and
//! preferences services. Records leave here strongly typed and checked, so
//! predictors never re-inspect raw shapes.

use crate::activity::{ActivityRecord, CustomPreferences};
use crate::errors::{NuggetResult, ValidationError};

/// Parse a JSON array of activity records and validate each one.
pub fn parse_activities(json: &str) -> NuggetResult<Vec<ActivityRecord>> {
    let records: Vec<ActivityRecord> = serde_json::from_str(json)?;
    for record in &records {
        validate_activity(record)?;
    }
    tracing::trace!(count = records.len(), "parsed activity records");
    Ok(records)
}

/// Parse a custom-preferences object. `null` yields `None`.
pub fn parse_preferences(json: &str) -> NuggetResult<Option<CustomPreferences>> {
    let prefs: Option<CustomPreferences> = serde_json::from_str(json)?;
    if let Some(ref p) = prefs {
        p.validate()?;
    }
    Ok(prefs)
}

/// Check one record against the invariants the predictors rely on.
pub fn validate_activity(record: &ActivityRecord) -> Result<(), ValidationError> {
    if record.id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }

    if let Some(amount) = record.amount_ml {
        check_finite(record, "amount_ml", amount)?;
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount {
                id: record.id.clone(),
                value: amount,
            });
        }
    }

    if let Some(duration) = record.duration_minutes {
        check_finite(record, "duration_minutes", duration)?;
        if duration < 0.0 {
            return Err(ValidationError::NegativeDuration {
                id: record.id.clone(),
                value: duration,
            });
        }
    }

    if let Some(ref details) = record.details {
        if details.activity_type() != record.activity_type {
            return Err(ValidationError::DetailsMismatch {
                id: record.id.clone(),
                activity_type: record.activity_type.to_string(),
                details_type: details.activity_type().to_string(),
            });
        }
        for (field, value) in details.numeric_fields() {
            check_finite(record, field, value)?;
        }
    }

    Ok(())
}

fn check_finite(record: &ActivityRecord, field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteValue {
            id: record.id.clone(),
            field: field.to_string(),
        })
    }
}
