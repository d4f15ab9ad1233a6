//! Remote-call failure taxonomy.

use thiserror::Error;

/// Any failure of a call to the hosted backend.
///
/// `Rejected` displays the backend's own message verbatim so callers that
/// surface it (registration) show exactly what the service said.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, code: Option<u32>, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Parse(String),

    /// Called outside the browser, where no backend session exists.
    #[error("not available on server")]
    Unavailable,
}

impl RemoteError {
    /// Build a rejection from a status code and the raw response body.
    ///
    /// Falls back to a status-only message when the body is not a backend fault.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<super::types::RemoteFault>(body) {
            Ok(fault) => Self::Rejected { status, code: fault.code, message: fault.message },
            Err(_) => Self::Rejected { status, code: None, message: format!("request failed with status {status}") },
        }
    }
}
