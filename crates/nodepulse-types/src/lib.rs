//! # NodePulse Types
//!
//! Core types, models, and error definitions for NodePulse.
//!
//! This crate provides the foundational type system for the NodePulse workspace:
//!
//! - **`error`** - Typed error hierarchy for loading and request execution
//! - **`models`** - Domain models (credentials, proxies, connection state, config)
//! - **`protocol`** - Wire types for the remote presence service
//!
//! ## Architecture Role
//!
//! `nodepulse-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!         nodepulse-types (this crate)
//!                 │
//!                 ▼
//!          nodepulse-core
//!                 │
//!                 ▼
//!          nodepulse-daemon
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde where they cross the wire
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{LoadError, RequestError};

// Re-export core model types
pub use models::{
    AccountCredential, AccountInfo, ConnectionState, ProxyEndpoint, ProxyStats, SessionConfig,
};

// Re-export wire types
pub use protocol::{ApiResponse, PingFailure, PingPayload};
