//! Defensive decoding of service responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed response body from the session or ping endpoints.
///
/// Any JSON value decodes into this shape; missing or mistyped fields
/// become `None` instead of a decode failure. Success classification is
/// left to the helpers so every call site asks the same questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub code: Option<i64>,
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Decode from an arbitrary JSON value. Non-object bodies produce an
    /// empty response (no code, no data) rather than an error.
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: value.get("code").and_then(Value::as_i64),
            data: value.get("data").cloned(),
        }
    }

    /// Top-level `code == 0`.
    pub fn is_success_code(&self) -> bool {
        self.code == Some(0)
    }

    /// The `data` payload as an object, when it is one.
    pub fn data_object(&self) -> Option<&serde_json::Map<String, Value>> {
        self.data.as_ref().and_then(Value::as_object)
    }

    /// Whether `data` is present and truthy (non-null, non-empty, non-zero).
    pub fn has_data_payload(&self) -> bool {
        match &self.data {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    /// The `uid` field inside `data`, when present.
    pub fn uid(&self) -> Option<&Value> {
        self.data_object().and_then(|o| o.get("uid"))
    }

    /// The reported network quality, defaulting to 0 when absent.
    pub fn ip_score(&self) -> i64 {
        self.data_object()
            .and_then(|o| o.get("ip_score"))
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_any_shape() {
        let resp = ApiResponse::from_value(&json!({"code": 0, "data": {"uid": "u1"}}));
        assert!(resp.is_success_code());
        assert_eq!(resp.uid(), Some(&json!("u1")));

        let resp = ApiResponse::from_value(&json!("not an object"));
        assert_eq!(resp.code, None);
        assert!(!resp.has_data_payload());

        let resp = ApiResponse::from_value(&json!({"code": "0"}));
        assert_eq!(resp.code, None, "mistyped code decodes as absent");
    }

    #[test]
    fn test_data_truthiness() {
        let truthy = [json!({"x": 1}), json!([1]), json!("s"), json!(1), json!(true)];
        for data in truthy {
            let resp = ApiResponse { code: Some(0), data: Some(data) };
            assert!(resp.has_data_payload());
        }
        let falsy = [json!({}), json!([]), json!(""), json!(0), json!(false), Value::Null];
        for data in falsy {
            let resp = ApiResponse { code: Some(0), data: Some(data) };
            assert!(!resp.has_data_payload());
        }
    }

    #[test]
    fn test_ip_score_defaults_to_zero() {
        let resp = ApiResponse::from_value(&json!({"code": 0, "data": {"ok": true}}));
        assert_eq!(resp.ip_score(), 0);
        let resp = ApiResponse::from_value(&json!({"code": 0, "data": {"ip_score": 87}}));
        assert_eq!(resp.ip_score(), 87);
    }
}
