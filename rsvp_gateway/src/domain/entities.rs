use serde::Serialize;

// The serialization within this layer is a dependency leak, but its a pragmatic approach
// Payload forwarded to the remote endpoint when a guest confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationRequest {
    pub id: String,
    pub name: String,
    // Forwarded as given; only `yes`/`no` are lowercased.
    pub attendance: String,
    pub phone: String,
}

// Successful confirmation, enriched with the share links handed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationResult {
    pub success: bool,
    pub message: String,
    pub confirmation_number: String,
    pub whatsapp_url: String,
    pub qr_url: String,
}

// Outcome of checking a confirmation code at the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub guest_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_request_serializes_with_remote_field_names() {
        let request = ConfirmationRequest {
            id: "7".to_string(),
            name: "Ana".to_string(),
            attendance: "si".to_string(),
            phone: String::new(),
        };

        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({ "id": "7", "name": "Ana", "attendance": "si", "phone": "" })
        );
    }
}
