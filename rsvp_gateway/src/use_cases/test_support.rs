use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::{ConfirmationRequest, GuestDirectory, RemoteError};

// Remote call observed by the fake directory.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ValidateCode(String),
    CheckConfirmation(String),
    Search(String),
    Submit(ConfirmationRequest),
}

// Fake guest directory that records calls and replays a canned answer.
#[derive(Clone)]
pub(crate) struct RecordingDirectory {
    calls: Arc<Mutex<Vec<Call>>>,
    response: Result<Value, RemoteError>,
}

impl RecordingDirectory {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Ok(json!({})),
        }
    }

    pub(crate) fn with_response(mut self, response: Result<Value, RemoteError>) -> Self {
        self.response = response;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: Call) -> Result<Value, RemoteError> {
        self.calls.lock().expect("calls mutex poisoned").push(call);
        self.response.clone()
    }
}

#[async_trait]
impl GuestDirectory for RecordingDirectory {
    async fn validate_code(&self, code: &str) -> Result<Value, RemoteError> {
        self.record(Call::ValidateCode(code.to_string()))
    }

    async fn check_confirmation(&self, guest_id: &str) -> Result<Value, RemoteError> {
        self.record(Call::CheckConfirmation(guest_id.to_string()))
    }

    async fn search(&self, name: &str) -> Result<Value, RemoteError> {
        self.record(Call::Search(name.to_string()))
    }

    async fn submit(&self, request: &ConfirmationRequest) -> Result<Value, RemoteError> {
        self.record(Call::Submit(request.clone()))
    }
}
