//! Error types.
//!
//! The pipeline itself is fail-open: malformed embedded syntax passes
//! through as literal text instead of aborting the transform. Errors only
//! exist at the decode seams, where callers turn them into "leave the text
//! untouched".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    /// A placeholder frame whose payload is not valid base64.
    #[error("invalid placeholder payload: {0}")]
    InvalidPlaceholder(#[from] base64::DecodeError),

    /// A decoded placeholder payload that is not valid UTF-8.
    #[error("placeholder payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Malformed options JSON from the host.
    #[error("invalid transcoder options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
