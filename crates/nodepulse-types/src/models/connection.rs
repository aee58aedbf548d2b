//! Per-account connection state.

use serde::{Deserialize, Serialize};

/// The most recent ping outcome for one account.
///
/// One state per account, shared across all of its proxies: stats are
/// tracked per proxy, but the connection verdict of a round is whichever
/// proxy last reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConnectionState {
    /// No ping outcome yet, or explicitly logged out
    #[default]
    #[serde(rename = "NONE_CONNECTION")]
    NoConnection,
    /// A proxy succeeded in the most recent round
    #[serde(rename = "CONNECTED")]
    Connected,
    /// Two consecutive round failures without a success in between
    #[serde(rename = "DISCONNECTED")]
    Disconnected,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::NoConnection => write!(f, "NONE_CONNECTION"),
            ConnectionState::Connected => write!(f, "CONNECTED"),
            ConnectionState::Disconnected => write!(f, "DISCONNECTED"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none_connection() {
        assert_eq!(ConnectionState::default(), ConnectionState::NoConnection);
    }

    #[test]
    fn test_display_matches_serde_rendering() {
        for state in [
            ConnectionState::NoConnection,
            ConnectionState::Connected,
            ConnectionState::Disconnected,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
    }
}
