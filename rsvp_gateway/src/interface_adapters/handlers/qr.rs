use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[tracing::instrument(name = "qr_code", skip_all, fields(code = %code))]
pub async fn qr_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let png = state.qr.render_png(&code).map_err(|e| {
        tracing::error!(error = %e, "failed to render qr code.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "No se pudo generar el QR".to_string(),
            }),
        )
    })?;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (header::CONTENT_LENGTH, png.len().to_string()),
    ];
    Ok((headers, png).into_response())
}
