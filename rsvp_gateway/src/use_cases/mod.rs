pub mod mapping;
pub mod qr;
pub mod relay;
pub mod share;

#[cfg(test)]
pub(crate) mod test_support;

pub use qr::{QrError, QrImageGenerator};
pub use relay::{RelayError, Route, SubmitInput, SubmitOutcome};
pub use share::ShareLinks;
