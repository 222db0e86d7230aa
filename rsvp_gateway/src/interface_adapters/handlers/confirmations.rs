use crate::interface_adapters::extract::{Payload, PayloadRejection};
use crate::interface_adapters::http::status_for;
use crate::interface_adapters::protocol::{SubmitError, SubmitRequest};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{SubmitInput, SubmitOutcome, relay};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[tracing::instrument(name = "submit_confirmation", skip_all)]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Result<Payload<SubmitRequest>, PayloadRejection>,
) -> Result<Response, (StatusCode, Json<SubmitError>)> {
    let body = body.map(|Payload(body)| body).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "unreadable submit body.");
        SubmitRequest::default()
    });

    // Map the wire payload into the use case input.
    let input = SubmitInput {
        id: body.id,
        name: body.name,
        attendance: body.attendance,
        phone: body.phone,
    };

    let outcome = relay::submit_confirmation(state.directory.as_ref(), &state.links, input)
        .await
        .map_err(|err| {
            (
                status_for(err.kind),
                Json(SubmitError {
                    success: false,
                    error: err.message.to_string(),
                }),
            )
        })?;

    match outcome {
        SubmitOutcome::Confirmed(confirmation) => {
            tracing::info!(
                confirmation_number = %confirmation.confirmation_number,
                "confirmation stored."
            );
            Ok(Json(confirmation).into_response())
        }
        SubmitOutcome::Rejected(remote) => Ok(Json(remote).into_response()),
    }
}
