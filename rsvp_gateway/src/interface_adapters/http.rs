// Shared HTTP mapping for classified relay failures.

use axum::http::StatusCode;

use crate::domain::ErrorKind;

// The single table from failure kind to response status.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorKind::Transport | ErrorKind::Parse => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
