//! Typed error definitions for NodePulse.
//!
//! Two domains cover every failure the core can surface:
//!
//! - [`LoadError`] - credential/proxy source failures at startup
//! - [`RequestError`] - requester outcomes that yield no usable response
//!
//! All errors are designed to be:
//!
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod load;
mod request;

pub use load::LoadError;
pub use request::RequestError;
