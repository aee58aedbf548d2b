//! Everything that touches the remote service: endpoint resolution, the
//! browser fingerprint, user-agent provisioning, and the requester.

pub mod client;
pub mod endpoints;
pub mod headers;
pub mod user_agent;

pub use client::ApiClient;
pub use endpoints::ApiEndpoints;
