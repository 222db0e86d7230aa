use crate::domain::GuestDirectory;
use crate::use_cases::{QrImageGenerator, ShareLinks};
use std::sync::Arc;

// Immutable per-process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub directory: Arc<dyn GuestDirectory>,
    pub links: ShareLinks,
    pub qr: QrImageGenerator,
}
