mod entities;
mod errors;
mod ports;

// Re-export the domain boundary types and ports.
pub use entities::{ConfirmationRequest, ConfirmationResult, ValidationResult};
pub use errors::{ErrorKind, RemoteError};
pub use ports::GuestDirectory;
