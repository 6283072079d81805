//! Submit-or-revert
//!
//! One policy for every mutating request: run the success continuation when
//! the server confirms, otherwise undo any optimistic DOM change and tell the
//! user (or the console) according to the flow's notice.

use std::future::Future;

use crate::dom;
use crate::error::ApiError;

/// How a failed request is surfaced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureNotice {
    /// Blocking alert with this message
    Alert(&'static str),
    /// Console only
    Log,
}

impl FailureNotice {
    /// Duplicate requests are dropped silently
    pub fn should_alert(&self, error: &ApiError) -> Option<&'static str> {
        match self {
            FailureNotice::Alert(message) if !error.is_busy() => Some(message),
            _ => None,
        }
    }
}

/// Spawn `request`; on success call `on_success` with its value, on any
/// failure call `revert` and surface the error per `notice`.
pub fn submit_or_revert<T, Fut, S, R>(action: &'static str, request: Fut, notice: FailureNotice, on_success: S, revert: R)
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
    R: FnOnce() + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        match request.await {
            Ok(value) => {
                tracing::info!(action, "request confirmed");
                on_success(value);
            }
            Err(error) => {
                if error.is_busy() {
                    tracing::debug!(action, %error, "duplicate request dropped");
                } else {
                    tracing::error!(action, %error, "request failed");
                }
                revert();
                if let Some(message) = notice.should_alert(&error) {
                    dom::alert(message);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_policy() {
        let alert = FailureNotice::Alert("Error: Could not delete task.");
        assert_eq!(alert.should_alert(&ApiError::Status(500)), Some("Error: Could not delete task."));
        assert_eq!(alert.should_alert(&ApiError::Busy("delete:1".into())), None);
        assert_eq!(FailureNotice::Log.should_alert(&ApiError::Status(500)), None);
    }
}
