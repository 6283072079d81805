//! Request Errors

use thiserror::Error;

/// Failure of a request to the planner server
#[derive(Debug, Error)]
pub enum ApiError {
    /// Fetch rejected, or the body could not be encoded/decoded
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("could not encode form body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),

    /// Same action on the same entity is still pending
    #[error("{0} is already in flight")]
    Busy(String),
}

impl ApiError {
    pub fn is_busy(&self) -> bool {
        matches!(self, ApiError::Busy(_))
    }
}
