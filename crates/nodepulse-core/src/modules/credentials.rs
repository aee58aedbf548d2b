//! Credential file loading.
//!
//! One bearer token per line, optionally wrapped in single or double
//! quotes; blank lines are skipped. Line order defines the 1-based
//! account index.

use std::path::Path;

use nodepulse_types::{AccountCredential, LoadError};

/// Load all account credentials from the token file.
///
/// A missing file or a file with zero usable lines aborts the whole
/// process, so both map to process-fatal [`LoadError`] variants.
pub async fn load_credentials(path: &Path) -> Result<Vec<AccountCredential>, LoadError> {
    let path_text = path.display().to_string();
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(LoadError::CredentialsMissing { path: path_text });
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Io { path: path_text.clone(), message: e.to_string() })?;

    let credentials: Vec<AccountCredential> = raw
        .lines()
        .map(|line| line.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, token)| AccountCredential::new(token, i as u32 + 1))
        .collect();

    if credentials.is_empty() {
        return Err(LoadError::NoCredentials { path: path_text });
    }

    tracing::info!(count = credentials.len(), path = %path_text, "Loaded credentials");
    Ok(credentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tokens(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_quotes_stripped_blanks_skipped() {
        let file = write_tokens("'token-one'\n\n  \"token-two\"  \ntoken-three\n");
        let creds = load_credentials(file.path()).await.unwrap();
        assert_eq!(creds.len(), 3);
        assert_eq!(creds[0].token, "token-one");
        assert_eq!(creds[1].token, "token-two");
        assert_eq!(creds[2].token, "token-three");
        // index is 1-based file order
        assert_eq!(creds[0].index, 1);
        assert_eq!(creds[2].index, 3);
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let err = load_credentials(Path::new("/nonexistent/tokens.txt")).await.unwrap_err();
        assert!(matches!(
            &err,
            LoadError::CredentialsMissing { path } if path.contains("tokens.txt")
        ));
        assert!(err.is_process_fatal());
    }

    #[tokio::test]
    async fn test_empty_file_is_fatal() {
        let file = write_tokens("\n   \n");
        let err = load_credentials(file.path()).await.unwrap_err();
        assert!(matches!(err, LoadError::NoCredentials { .. }));
        assert!(err.is_process_fatal());
    }
}
