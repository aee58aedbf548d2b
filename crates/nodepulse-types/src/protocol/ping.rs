//! Ping wire payload and round-failure classification.

use serde::Serialize;
use serde_json::Value;

use crate::models::ProxyStats;

/// Body of a liveness report.
///
/// `id` is the authenticated uid (JSON null before authentication),
/// `browser_id` is the serialized per-proxy stats, `timestamp` is the
/// round start as integer unix seconds.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PingPayload {
    pub id: Value,
    pub browser_id: ProxyStats,
    pub timestamp: i64,
}

/// Why an entire proxy round (all endpoints) failed.
///
/// `Rejected` means some endpoint answered with an authoritative 403,
/// HTTP-level or application-level; everything else collapses to the
/// generic `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingFailure {
    Rejected,
    Failed,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let payload = PingPayload {
            id: json!("uid-1"),
            browser_id: ProxyStats::new(1_700_000_000.0),
            timestamp: 1_700_000_180,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], "uid-1");
        assert_eq!(json["timestamp"], 1_700_000_180);
        assert_eq!(json["browser_id"]["ping_count"], 0);
    }

    #[test]
    fn test_unauthenticated_id_is_null() {
        let payload = PingPayload {
            id: Value::Null,
            browser_id: ProxyStats::new(0.0),
            timestamp: 0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], Value::Null);
    }
}
