use crate::interface_adapters::extract::{Payload, PayloadRejection};
use crate::interface_adapters::http::status_for;
use crate::interface_adapters::protocol::{
    CodeAcceptedResponse, CodeRejectedResponse, ValidateCodeRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::relay;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[tracing::instrument(name = "validate_code", skip_all)]
pub async fn validate_code(
    State(state): State<Arc<AppState>>,
    body: Result<Payload<ValidateCodeRequest>, PayloadRejection>,
) -> Result<Response, (StatusCode, Json<CodeRejectedResponse>)> {
    let body = body.map(|Payload(body)| body).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "unreadable validate-code body.");
        ValidateCodeRequest::default()
    });

    let result = relay::validate_code(state.directory.as_ref(), body.code.as_deref())
        .await
        .map_err(|err| {
            (
                status_for(err.kind),
                Json(CodeRejectedResponse {
                    is_valid: false,
                    message: err.message.to_string(),
                }),
            )
        })?;

    tracing::info!(is_valid = result.is_valid, "code validated.");

    if result.is_valid {
        Ok(Json(CodeAcceptedResponse {
            is_valid: true,
            message: result.message,
            guest_name: result.guest_name,
        })
        .into_response())
    } else {
        Ok(Json(CodeRejectedResponse {
            is_valid: false,
            message: result.message,
        })
        .into_response())
    }
}
