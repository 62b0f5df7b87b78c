use serde_json::Value;

use crate::error::AppError;

const REQUIRED_KEYS: [&str; 2] = ["homeworks", "current_date"];

/// Checks the shape of a decoded `homework_statuses` payload.
///
/// The type of `homeworks` is checked before key presence so that a present
/// but malformed field is reported as such. All missing keys are reported
/// together.
pub fn check_response(response: &Value) -> Result<(), AppError> {
    let Some(fields) = response.as_object() else {
        return Err(AppError::UnexpectedType {
            field: "response",
            expected: "object",
        });
    };

    if fields.get("homeworks").is_some_and(|homeworks| !homeworks.is_array()) {
        return Err(AppError::UnexpectedType {
            field: "homeworks",
            expected: "array",
        });
    }

    if fields.is_empty() {
        return Err(AppError::EmptyPayload);
    }

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|&key| !fields.contains_key(key))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingKey(missing.join(", ")));
    }

    if !fields["current_date"].is_i64() {
        return Err(AppError::UnexpectedType {
            field: "current_date",
            expected: "integer",
        });
    }

    Ok(())
}
