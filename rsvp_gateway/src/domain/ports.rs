use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ConfirmationRequest, RemoteError};

// Port for the remote guest list. Handlers depend on this trait, not on the
// concrete HTTP client, so tests can swap in a fake.
//
// Every method returns the parsed remote JSON; shaping it is left to the use cases.
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    async fn validate_code(&self, code: &str) -> Result<Value, RemoteError>;
    async fn check_confirmation(&self, guest_id: &str) -> Result<Value, RemoteError>;
    async fn search(&self, name: &str) -> Result<Value, RemoteError>;
    async fn submit(&self, request: &ConfirmationRequest) -> Result<Value, RemoteError>;
}
