use crate::domain::{ConfirmationRequest, ErrorKind, GuestDirectory, RemoteError};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header::ACCEPT};
use serde_json::Value;
use std::time::Duration;
use url::Url;

// Per-call deadlines for the remote scripting endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteTimeouts {
    // Code validation and confirmation checks.
    pub lookup: Duration,
    pub search: Duration,
    pub submit: Duration,
}

impl Default for RemoteTimeouts {
    fn default() -> Self {
        Self {
            lookup: Duration::from_secs(10),
            search: Duration::from_secs(15),
            submit: Duration::from_secs(20),
        }
    }
}

// Thin wrapper around reqwest for the spreadsheet-backed scripting endpoint.
// Lookups are GETs keyed by an `action` query parameter; submissions are a JSON POST.
#[derive(Clone)]
pub struct ScriptClient {
    http: Client,
    script_url: Url,
    timeouts: RemoteTimeouts,
}

impl ScriptClient {
    pub fn new(
        script_url: Url,
        user_agent: &str,
        timeouts: RemoteTimeouts,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            script_url,
            timeouts,
        })
    }

    fn action_url(&self, action: &str, key: &str, value: &str) -> Url {
        let mut url = self.script_url.clone();
        url.query_pairs_mut()
            .append_pair("action", action)
            .append_pair(key, value);
        url
    }

    async fn get_json(&self, url: Url, timeout: Duration) -> Result<Value, RemoteError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| RemoteError::new(classify_error(&err), err.to_string()))?;

        read_json(response).await
    }
}

#[async_trait]
impl GuestDirectory for ScriptClient {
    async fn validate_code(&self, code: &str) -> Result<Value, RemoteError> {
        tracing::debug!("relaying code validation.");
        let url = self.action_url("validate", "code", code);
        self.get_json(url, self.timeouts.lookup).await
    }

    async fn check_confirmation(&self, guest_id: &str) -> Result<Value, RemoteError> {
        tracing::debug!(%guest_id, "relaying confirmation check.");
        let url = self.action_url("checkConfirmation", "guestId", guest_id);
        self.get_json(url, self.timeouts.lookup).await
    }

    async fn search(&self, name: &str) -> Result<Value, RemoteError> {
        tracing::debug!(%name, "relaying guest search.");
        let url = self.action_url("search", "name", name);
        self.get_json(url, self.timeouts.search).await
    }

    async fn submit(&self, request: &ConfirmationRequest) -> Result<Value, RemoteError> {
        tracing::debug!(guest_id = %request.id, "relaying confirmation submit.");
        let response = self
            .http
            .post(self.script_url.clone())
            .header(ACCEPT, "application/json")
            .json(request)
            .timeout(self.timeouts.submit)
            .send()
            .await
            .map_err(|err| RemoteError::new(classify_error(&err), err.to_string()))?;

        read_json(response).await
    }
}

async fn read_json(response: Response) -> Result<Value, RemoteError> {
    accept_status(response.status())?;
    let body = response
        .bytes()
        .await
        .map_err(|err| RemoteError::new(classify_error(&err), err.to_string()))?;
    decode_body(&body)
}

// Remote 2xx-4xx answers carry a body worth parsing; anything else is a transport failure.
pub fn accept_status(status: StatusCode) -> Result<(), RemoteError> {
    if (200..500).contains(&status.as_u16()) {
        Ok(())
    } else {
        Err(RemoteError::new(
            ErrorKind::Transport,
            format!("remote responded with status {status}"),
        ))
    }
}

// Parse the remote body. Scripts sometimes answer with JSON wrapped in a JSON string,
// so a string holding JSON is unwrapped once.
pub fn decode_body(body: &[u8]) -> Result<Value, RemoteError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| RemoteError::new(ErrorKind::Parse, err.to_string()))?;

    match value {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(inner) => Ok(inner),
            Err(_) => Ok(Value::String(text)),
        },
        other => Ok(other),
    }
}

pub fn classify_error(err: &reqwest::Error) -> ErrorKind {
    if err.is_timeout() {
        ErrorKind::Timeout
    } else if err.is_connect() && is_name_resolution_failure(err) {
        ErrorKind::NotFound
    } else {
        ErrorKind::Transport
    }
}

// reqwest exposes no typed DNS error, so walk the source chain for the resolver's message.
fn is_name_resolution_failure(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(source) = current {
        let text = source.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        current = source.source();
    }
    false
}
