use thiserror::Error;

/// Failures of the two API operations. `Display` is the exact text shown to
/// the user in the status line, so the server-supplied detail (when one was
/// parseable) is the whole message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{detail}")]
    Http { status: u16, detail: String },
}

impl ApiError {
    /// Non-2xx response with no usable error body: surface the bare status.
    pub fn from_status(status: u16) -> Self {
        ApiError::Http {
            status,
            detail: format!("HTTP status {status}"),
        }
    }
}
