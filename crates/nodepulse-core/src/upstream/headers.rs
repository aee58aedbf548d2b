//! Browser-extension fingerprint headers.
//!
//! The remote service rejects calls that do not present a convincing
//! browser-extension client, so every session/ping request carries this
//! fixed header set byte-for-byte. Only the bearer token varies.

use nodepulse_types::RequestError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const EXTENSION_ORIGIN: &str = "chrome-extension://lgmpfmgeabnnlemejacfljbmonaomfmm";
const REFERER: &str = "https://app.nodepay.ai/";
const FINGERPRINT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";
const SEC_CH_UA: &str =
    "\"Chromium\";v=\"130\", \"Google Chrome\";v=\"130\", \"Not?A_Brand\";v=\"99\"";

/// Build the full API header set for one bearer token.
///
/// Fails only when the token itself contains bytes that cannot appear in
/// an HTTP header; that is a configuration problem, not a transient one.
pub fn build_headers(token: &str) -> Result<HeaderMap, RequestError> {
    let mut headers = HeaderMap::new();

    let auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        RequestError::Malformed { message: "token contains invalid header bytes".to_string() }
    })?;
    headers.insert(reqwest::header::AUTHORIZATION, auth);

    let fixed: &[(&str, &str)] = &[
        ("Content-Type", "application/json"),
        ("Origin", EXTENSION_ORIGIN),
        ("Referer", REFERER),
        ("User-Agent", FINGERPRINT_USER_AGENT),
        ("Accept", "application/json, text/plain, */*"),
        ("Accept-Language", "en-US,en;q=0.5"),
        ("Sec-Ch-Ua", SEC_CH_UA),
        ("Sec-Ch-Ua-Mobile", "?0"),
        ("Sec-Ch-Ua-Platform", "Windows"),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "cors-site"),
        ("Priority", "u=1, i"),
    ];
    for (name, value) in fixed {
        // Static strings, known-valid header bytes
        if let (Ok(name), Ok(value)) =
            (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value))
        {
            headers.insert(name, value);
        }
    }

    Ok(headers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_fingerprint_present() {
        let headers = build_headers("tok-123").unwrap();
        assert_eq!(headers["Authorization"], "Bearer tok-123");
        assert_eq!(headers["Origin"], EXTENSION_ORIGIN);
        assert_eq!(headers["Referer"], "https://app.nodepay.ai/");
        assert_eq!(headers["Content-Type"], "application/json");
        assert!(headers["User-Agent"].to_str().unwrap().contains("Chrome/130"));
        assert_eq!(headers["Sec-Ch-Ua-Mobile"], "?0");
        assert_eq!(headers["sec-fetch-mode"], "cors");
        assert_eq!(headers["Priority"], "u=1, i");
    }

    #[test]
    fn test_invalid_token_bytes_rejected() {
        let err = build_headers("bad\ntoken").unwrap_err();
        assert!(matches!(err, RequestError::Malformed { .. }));
    }
}
