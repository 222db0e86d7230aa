use std::fmt;

// Closed classification of every way a relayed call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Remote host could not be resolved.
    NotFound,
    Timeout,
    // Connection failures, remote 5xx and anything else unclassified.
    Transport,
    // Remote body was not the JSON we expect.
    Parse,
    // Client input was missing or malformed.
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Transport => "transport",
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
        };
        f.write_str(label)
    }
}

// Failure talking to the remote scripting endpoint.
// `detail` is for logs only and must never be sent to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl RemoteError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remote {} error: {}", self.kind, self.detail)
    }
}

impl std::error::Error for RemoteError {}
