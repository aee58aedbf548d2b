//! Account credentials loaded from the token file.

use serde::{Deserialize, Serialize};

/// One bearer token plus its 1-based position in the credential file.
///
/// The index is used only for logging and proxy-file namespacing.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountCredential {
    pub token: String,
    pub index: u32,
}

impl AccountCredential {
    pub fn new(token: impl Into<String>, index: u32) -> Self {
        Self { token: token.into(), index }
    }

    /// Masked rendering for logs. Never log the full token.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 10 {
            return "***".to_string();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_token_hides_middle() {
        let cred = AccountCredential::new("eyJhbGciOiJIUzI1NiJ9.payload.signature", 1);
        let masked = cred.masked_token();
        assert!(masked.starts_with("eyJhbG"));
        assert!(masked.ends_with("ture"));
        assert!(!masked.contains("payload"));
    }

    #[test]
    fn test_short_token_fully_masked() {
        let cred = AccountCredential::new("short", 2);
        assert_eq!(cred.masked_token(), "***");
    }
}
