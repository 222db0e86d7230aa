use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Every input field is optional so a missing one reaches the presence check
// instead of failing extraction. Body fields accept strings or numbers, since
// guest ids come back from search as numbers.

#[derive(Debug, Default, Deserialize)]
pub struct ValidateCodeRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfirmationQuery {
    #[serde(default)]
    pub guest_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub attendance: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone: Option<String>,
}

// Strings and numbers become text; null, booleans, arrays and objects count as absent.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

// Response payload for a code that checked out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAcceptedResponse {
    pub is_valid: bool,
    pub message: String,
    // Always present, null when the remote did not name the guest.
    pub guest_name: Option<String>,
}

// Response payload for a rejected code or a failed validation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRejectedResponse {
    pub is_valid: bool,
    pub message: String,
}

// Failure envelopes, one per route family.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationCheckError {
    pub has_confirmed: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SearchError {
    pub found: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitError {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub routes: RouteDirectory,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDirectory {
    pub health: &'static str,
    pub search: &'static str,
    pub submit: &'static str,
    pub check_confirmation: &'static str,
    #[serde(rename = "validateQR")]
    pub validate_qr: &'static str,
    pub qr_code: &'static str,
}
