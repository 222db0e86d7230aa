// Shared bootstrapping for integration tests: a stub of the remote scripting
// endpoint plus a real gateway pointed at it, both on ephemeral ports.
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use rsvp_gateway::frameworks::config::{Config, FileConfig};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

// Public origin the gateway is told to advertise in share links.
pub const PUBLIC_BASE_URL: &str = "https://rsvp.example.com";
// Search deadline used by the test gateway; the stub's slow path sleeps well past it.
pub const SEARCH_TIMEOUT_MS: u64 = 200;

// Everything the stub remote has received, for assertions.
#[derive(Clone, Default)]
pub struct StubLog {
    pub queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub submissions: Arc<Mutex<Vec<Value>>>,
}

impl StubLog {
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().expect("stub log poisoned").clone()
    }

    pub fn submissions(&self) -> Vec<Value> {
        self.submissions.lock().expect("stub log poisoned").clone()
    }
}

pub struct TestGateway {
    pub base_url: String,
    pub remote: StubLog,
}

// Start the stub remote and a gateway relaying to it.
pub async fn start() -> TestGateway {
    let remote = StubLog::default();
    let remote_url = spawn_stub_remote(remote.clone()).await;

    let env: HashMap<&str, String> = HashMap::from([
        ("BIND_HOST", "127.0.0.1".to_string()),
        ("SCRIPT_URL", format!("{remote_url}/exec")),
        ("PUBLIC_BASE_URL", PUBLIC_BASE_URL.to_string()),
        ("SEARCH_TIMEOUT_MS", SEARCH_TIMEOUT_MS.to_string()),
        ("ALLOWED_ORIGINS", "https://guests.example.com".to_string()),
    ]);
    let config = Config::resolve(FileConfig::default(), |key: &str| env.get(key).cloned())
        .expect("test config should resolve");

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral gateway port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        rsvp_gateway::run(listener, config)
            .await
            .expect("gateway failed");
    });

    TestGateway {
        base_url: format!("http://{addr}"),
        remote,
    }
}

async fn spawn_stub_remote(log: StubLog) -> String {
    let app = Router::new()
        .route("/exec", get(stub_lookup).post(stub_submit))
        .with_state(log);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral stub port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub remote failed");
    });

    format!("http://{addr}")
}

async fn stub_lookup(
    State(log): State<StubLog>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    log.queries
        .lock()
        .expect("stub log poisoned")
        .push(query.clone());

    let action = query.get("action").map(String::as_str).unwrap_or_default();
    match action {
        // Answer as text, the way the scripting backend often does.
        "validate" if query.get("code").map(String::as_str) == Some("GOOD-1") => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            r#"{"success":true,"message":"Bienvenido","guestName":"Ana"}"#,
        )
            .into_response(),
        "validate" => Json(json!({ "success": false })).into_response(),
        "checkConfirmation" => Json(json!({
            "hasConfirmed": true,
            "guestId": query.get("guestId"),
        }))
        .into_response(),
        "search" => match query.get("name").map(String::as_str) {
            Some("slow") => {
                tokio::time::sleep(Duration::from_millis(SEARCH_TIMEOUT_MS * 10)).await;
                Json(json!({ "found": false })).into_response()
            }
            Some("broken") => StatusCode::BAD_GATEWAY.into_response(),
            Some("html") => "<html>Moved</html>".into_response(),
            Some(name) => Json(json!({
                "found": true,
                "guests": [{ "id": 3, "name": name }],
            }))
            .into_response(),
            None => Json(json!({ "found": false })).into_response(),
        },
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_submit(State(log): State<StubLog>, Json(body): Json<Value>) -> Json<Value> {
    log.submissions
        .lock()
        .expect("stub log poisoned")
        .push(body.clone());

    if body["id"] == "taken" {
        return Json(json!({ "success": false, "message": "Ya confirmado" }));
    }
    Json(json!({ "success": true, "confirmationNumber": "ABC123" }))
}
