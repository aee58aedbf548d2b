//! Service endpoint resolution.

/// Production session endpoint.
const DEFAULT_SESSION_URL: &str = "http://api.nodepay.ai/api/auth/session";

/// Production ping endpoints, in priority order.
const DEFAULT_PING_URLS: &[&str] = &["https://nw.nodepay.org/api/network/ping"];

/// The resolved set of remote endpoints used by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub session_url: String,
    /// Tried strictly in order until one succeeds.
    pub ping_urls: Vec<String>,
}

impl ApiEndpoints {
    /// Resolve endpoints from the environment, falling back to the
    /// production defaults on missing, empty, or invalid overrides.
    ///
    /// - `NODEPULSE_SESSION_URL` - single URL
    /// - `NODEPULSE_PING_URLS` - comma-separated URLs, priority order
    pub fn resolve() -> Self {
        let session_url = resolve_session_url(std::env::var("NODEPULSE_SESSION_URL").ok());
        let ping_urls = resolve_ping_urls(std::env::var("NODEPULSE_PING_URLS").ok());
        Self { session_url, ping_urls }
    }

    /// Explicit endpoints, primarily for tests.
    pub fn fixed(session_url: impl Into<String>, ping_urls: Vec<String>) -> Self {
        Self { session_url: session_url.into(), ping_urls }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            session_url: DEFAULT_SESSION_URL.to_string(),
            ping_urls: DEFAULT_PING_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn resolve_session_url(raw: Option<String>) -> String {
    match raw {
        Some(raw) => {
            let url = raw.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                tracing::warn!("NODEPULSE_SESSION_URL is empty, using default");
                return DEFAULT_SESSION_URL.to_string();
            }
            if url::Url::parse(&url).is_err() {
                tracing::warn!("NODEPULSE_SESSION_URL is not a valid URL, using default");
                return DEFAULT_SESSION_URL.to_string();
            }
            tracing::info!("Using custom session URL");
            url
        },
        None => DEFAULT_SESSION_URL.to_string(),
    }
}

fn resolve_ping_urls(raw: Option<String>) -> Vec<String> {
    let defaults = || DEFAULT_PING_URLS.iter().map(|s| s.to_string()).collect();
    match raw {
        Some(raw) => {
            let urls: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if urls.is_empty() {
                tracing::warn!("NODEPULSE_PING_URLS is empty, using defaults");
                return defaults();
            }
            if urls.iter().any(|u| url::Url::parse(u).is_err()) {
                tracing::warn!("NODEPULSE_PING_URLS contains an invalid URL, using defaults");
                return defaults();
            }
            tracing::info!(count = urls.len(), "Using custom ping URLs");
            urls
        },
        None => defaults(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let endpoints = ApiEndpoints::default();
        assert_eq!(endpoints.session_url, "http://api.nodepay.ai/api/auth/session");
        assert_eq!(endpoints.ping_urls, vec!["https://nw.nodepay.org/api/network/ping"]);
    }

    #[test]
    fn test_session_override_validation() {
        assert_eq!(
            resolve_session_url(Some("https://mock.test/session/".into())),
            "https://mock.test/session"
        );
        assert_eq!(resolve_session_url(Some("   ".into())), DEFAULT_SESSION_URL);
        assert_eq!(resolve_session_url(Some("not a url".into())), DEFAULT_SESSION_URL);
        assert_eq!(resolve_session_url(None), DEFAULT_SESSION_URL);
    }

    #[test]
    fn test_ping_override_preserves_priority_order() {
        let urls =
            resolve_ping_urls(Some("https://a.test/ping, https://b.test/ping/".into()));
        assert_eq!(urls, vec!["https://a.test/ping", "https://b.test/ping"]);
    }

    #[test]
    fn test_ping_override_falls_back_when_any_invalid() {
        let urls = resolve_ping_urls(Some("https://a.test/ping,still not a url".into()));
        assert_eq!(urls, vec![DEFAULT_PING_URLS[0].to_string()]);
        assert_eq!(resolve_ping_urls(Some(" , ".into())), vec![DEFAULT_PING_URLS[0].to_string()]);
    }
}
