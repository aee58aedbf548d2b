//! Domain models for NodePulse.

mod account_info;
mod config;
mod connection;
mod credential;
mod proxy;

pub use account_info::AccountInfo;
pub use config::SessionConfig;
pub use connection::ConnectionState;
pub use credential::AccountCredential;
pub use proxy::{ProxyEndpoint, ProxyStats};
