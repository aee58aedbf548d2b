//! File-backed loaders for credentials and proxy sets.

pub mod credentials;
pub mod proxies;
