use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the content backend.
///
/// A missing document is not an error: queries return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("CMS API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CmsError {
    /// Network failures, rate limiting and server errors are worth retrying;
    /// other client errors and malformed documents are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            CmsError::Request(e) => !e.is_decode() && !e.is_builder(),
            CmsError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            CmsError::Decode(_) => false,
        }
    }
}
