//! Wire types for the remote presence service.
//!
//! The service speaks loosely-shaped JSON; responses are decoded
//! defensively field-by-field rather than assumed structurally.

mod ping;
mod response;

pub use ping::{PingFailure, PingPayload};
pub use response::ApiResponse;
