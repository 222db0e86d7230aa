use crate::interface_adapters::protocol::{HealthResponse, IndexResponse, RouteDirectory};
use axum::Json;
use chrono::{SecondsFormat, Utc};

// Liveness only; never touches the remote endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        message: "Servidor funcionando correctamente",
    })
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "¡Bienvenido a la API de la boda de Cecilia & Ángel!",
        status: "Backend funcionando correctamente",
        routes: RouteDirectory {
            health: "/api/health",
            search: "/api/search?name=nombre",
            submit: "POST /api/submit",
            check_confirmation: "/api/check-confirmation?guestId=ID",
            validate_qr: "POST /api/validate-code",
            qr_code: "/qr-code/:code",
        },
    })
}
