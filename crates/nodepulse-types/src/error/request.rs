//! Request execution errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcomes of a request that produced no usable response.
///
/// `Forbidden` is the authoritative "access revoked" signal and is never
/// retried; every other variant is what remains after the requester has
/// exhausted its retry budget.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RequestError {
    /// Transport-level failure (timeout, connection refused, DNS)
    #[error("Transport failure after {attempts} attempts: {message}")]
    Transport { attempts: u32, message: String },

    /// Non-200, non-403 HTTP status
    #[error("HTTP {status} after {attempts} attempts")]
    Status { status: u16, attempts: u32 },

    /// HTTP 403 - authoritative rejection, never retried
    #[error("Access revoked (HTTP 403)")]
    Forbidden,

    /// Response body could not be interpreted
    #[error("Malformed response: {message}")]
    Malformed { message: String },
}

impl RequestError {
    /// Distinguishes the authoritative rejection from transient failures.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, RequestError::Forbidden)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_detection() {
        assert!(RequestError::Forbidden.is_forbidden());
        assert!(!RequestError::Status { status: 500, attempts: 3 }.is_forbidden());
        assert!(!RequestError::Transport { attempts: 3, message: "timeout".into() }.is_forbidden());
    }

    #[test]
    fn test_error_display() {
        let err = RequestError::Status { status: 502, attempts: 3 };
        let msg = format!("{}", err);
        assert!(msg.contains("502"));
        assert!(msg.contains("3"));
    }
}
