use crate::interface_adapters::handlers::codes::validate_code;
use crate::interface_adapters::handlers::confirmations::submit;
use crate::interface_adapters::handlers::guests::{check_confirmation, search};
use crate::interface_adapters::handlers::meta::{health, index};
use crate::interface_adapters::handlers::qr::qr_code;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/search", get(search))
        .route("/api/submit", post(submit))
        .route("/api/validate-code", post(validate_code))
        .route("/api/check-confirmation", get(check_confirmation))
        .route("/qr-code/{code}", get(qr_code))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
