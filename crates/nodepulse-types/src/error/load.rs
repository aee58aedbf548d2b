//! Credential and proxy source errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading credential or proxy sources.
///
/// `CredentialsMissing` and `NoCredentials` abort the whole process;
/// `NoProxies` is fatal only for the affected account.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum LoadError {
    /// Credential file does not exist
    #[error("Credential file not found: {path}")]
    CredentialsMissing { path: String },

    /// Credential file exists but contains no usable tokens
    #[error("No tokens found in credential file: {path}")]
    NoCredentials { path: String },

    /// Neither the account-specific nor the shared proxy file yields a proxy
    #[error("No proxies found for account {account} in either account-specific or shared proxy file")]
    NoProxies { account: u32 },

    /// Underlying I/O failure while reading a source file
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },
}

impl LoadError {
    /// Whether this error should abort the whole process rather than
    /// just skip one account.
    pub fn is_process_fatal(&self) -> bool {
        matches!(self, LoadError::CredentialsMissing { .. } | LoadError::NoCredentials { .. })
    }
}
