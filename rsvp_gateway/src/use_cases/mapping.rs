// Pure translations from remote JSON into the gateway's fixed response shapes.
// One function per route; none of them perform I/O.

use serde_json::Value;

use crate::domain::{ErrorKind, ValidationResult};

pub const CODE_VALID_MESSAGE: &str = "Código válido";
pub const CODE_INVALID_MESSAGE: &str = "Código inválido o ya utilizado";

// Remote answer to a submission once its success flag has been read.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteSubmission {
    Confirmed { confirmation_number: String },
    // Forwarded to the client untouched.
    Rejected(Value),
}

// Map the remote `validate` answer onto a validation result.
pub fn map_validation(remote: &Value) -> Result<ValidationResult, ErrorKind> {
    if !remote.is_object() {
        return Err(ErrorKind::Parse);
    }

    let result = if is_truthy(remote.get("success")) {
        ValidationResult {
            is_valid: true,
            message: text_field(remote, "message").unwrap_or_else(|| CODE_VALID_MESSAGE.into()),
            guest_name: text_field(remote, "guestName"),
        }
    } else {
        ValidationResult {
            is_valid: false,
            message: text_field(remote, "message").unwrap_or_else(|| CODE_INVALID_MESSAGE.into()),
            guest_name: None,
        }
    };
    Ok(result)
}

// Confirmation checks are passed through as the remote shaped them.
pub fn map_confirmation_check(remote: Value) -> Value {
    remote
}

// Search results are passed through, but only when they are a JSON object.
pub fn map_search(remote: Value) -> Result<Value, ErrorKind> {
    if remote.is_object() {
        Ok(remote)
    } else {
        Err(ErrorKind::Parse)
    }
}

// Read the success flag and confirmation number of a submission.
pub fn map_submission(remote: Value) -> Result<RemoteSubmission, ErrorKind> {
    if !is_truthy(remote.get("success")) {
        return Ok(RemoteSubmission::Rejected(remote));
    }

    text_field(&remote, "confirmationNumber")
        .map(|confirmation_number| RemoteSubmission::Confirmed {
            confirmation_number,
        })
        .ok_or(ErrorKind::Parse)
}

// Flag semantics follow the loosely typed remote scripts: null, false, 0, "" are false.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

// Non-empty string or number field, as text.
fn text_field(remote: &Value, key: &str) -> Option<String> {
    match remote.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
