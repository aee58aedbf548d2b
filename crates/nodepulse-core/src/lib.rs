//! # NodePulse Core
//!
//! Session logic for NodePulse: credential/proxy loading, the HTTP
//! requester with its retry policy, and the per-account session state
//! machine (authentication, ping scheduler, connection tracking).
//!
//! Layout:
//!
//! - **`modules`** - file-backed loaders (credentials, proxy sets)
//! - **`upstream`** - endpoints, browser fingerprint, user agents, requester
//! - **`session`** - AccountSession, authenticator, ping round, session pool

pub mod modules;
pub mod session;
pub mod upstream;

pub use session::{AccountSession, SessionPool};
pub use upstream::{ApiClient, ApiEndpoints};

/// Current wall-clock time as fractional unix seconds.
pub(crate) fn unix_now() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}
