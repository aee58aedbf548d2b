//! Proxy endpoints and per-proxy ping statistics.

use serde::{Deserialize, Serialize};

/// One egress proxy, identified by its raw source line.
///
/// Identity is the string as written in the proxy file; normalization for
/// client construction happens elsewhere and never feeds back into identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxyEndpoint(String);

impl ProxyEndpoint {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-proxy counters, index-aligned with the account's Proxy Set.
///
/// Serialized verbatim as the wire `browser_id` object, so field names
/// and types match the remote contract exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyStats {
    /// Attempts made against this proxy, +1 per endpoint attempt. Monotonic.
    pub ping_count: u64,
    /// Attempts that succeeded. Always <= ping_count.
    pub successful_pings: u64,
    /// Last network quality reported by the service (`ip_score`).
    pub score: i64,
    /// Unix seconds at creation. Immutable.
    pub start_time: f64,
    /// Unix seconds of the last attempt, set before the attempt is made
    /// (so it is set even when the ping ultimately fails).
    pub last_ping_time: Option<f64>,
}

impl ProxyStats {
    pub fn new(start_time: f64) -> Self {
        Self {
            ping_count: 0,
            successful_pings: 0,
            score: 0,
            start_time,
            last_ping_time: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_identity_is_raw_line() {
        let a = ProxyEndpoint::new("1.2.3.4:8080:user:pass");
        let b = ProxyEndpoint::new("1.2.3.4:8080:user:pass");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "1.2.3.4:8080:user:pass");
    }

    #[test]
    fn test_stats_wire_shape() {
        let stats = ProxyStats::new(1_700_000_000.0);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["ping_count"], 0);
        assert_eq!(json["successful_pings"], 0);
        assert_eq!(json["score"], 0);
        assert_eq!(json["start_time"], 1_700_000_000.0);
        assert_eq!(json["last_ping_time"], serde_json::Value::Null);
    }
}
