//! Authenticated account identity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `data` object returned by a successful authentication call.
///
/// Holds at least `uid` once authenticated; empty before authentication
/// and again after logout. Kept as the raw JSON object so unknown fields
/// survive untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AccountInfo(Map<String, Value>);

impl AccountInfo {
    /// Adopt the `data` object of an authentication response. Non-object
    /// values yield an empty identity.
    pub fn from_data(data: &Value) -> Self {
        match data.as_object() {
            Some(map) => Self(map.clone()),
            None => Self::default(),
        }
    }

    /// The raw value under the `uid` key; JSON null when unauthenticated.
    pub fn uid(&self) -> Value {
        self.0.get("uid").cloned().unwrap_or(Value::Null)
    }

    pub fn has_uid(&self) -> bool {
        self.0.contains_key("uid")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop all identity fields (logout).
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_data_keeps_unknown_fields() {
        let info = AccountInfo::from_data(&json!({"uid": "abc", "tier": 2}));
        assert!(info.has_uid());
        assert_eq!(info.uid(), json!("abc"));
        let round = serde_json::to_value(&info).unwrap();
        assert_eq!(round["tier"], 2);
    }

    #[test]
    fn test_clear_resets_identity() {
        let mut info = AccountInfo::from_data(&json!({"uid": "abc"}));
        info.clear();
        assert!(info.is_empty());
        assert!(!info.has_uid());
        assert_eq!(info.uid(), Value::Null);
    }

    #[test]
    fn test_non_object_data_is_empty() {
        assert!(AccountInfo::from_data(&json!("nope")).is_empty());
        assert!(AccountInfo::from_data(&Value::Null).is_empty());
    }
}
