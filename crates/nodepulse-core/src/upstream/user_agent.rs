//! User-Agent provisioning for the per-proxy clients.
//!
//! Deterministic selection keyed by account: the same account always
//! presents the same UA, so its fingerprint stays consistent across
//! process restarts. The API fingerprint headers override this on
//! session/ping calls; this UA covers everything else (IP lookup,
//! connection defaults).

/// FNV-1a hash constants (stable across Rust versions, unlike DefaultHasher).
const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

fn fnv1a_hash(data: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in data.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Realistic desktop browser User-Agent strings.
const USER_AGENT_POOL: &[&str] = &[
    // Chrome on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36",
    // Chrome on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    // Chrome on Linux
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    // Firefox on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    // Firefox on Linux
    "Mozilla/5.0 (X11; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0",
    // Edge on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
    // Safari on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15",
];

/// Fallback UA when no account context is available.
pub fn default_user_agent() -> &'static str {
    USER_AGENT_POOL[0]
}

/// Deterministic UA for an account key (e.g. `account-3`).
#[inline]
pub fn user_agent_for_account(key: &str) -> &'static str {
    let index = (fnv1a_hash(key) as usize) % USER_AGENT_POOL.len();
    USER_AGENT_POOL[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_selection() {
        assert_eq!(user_agent_for_account("account-1"), user_agent_for_account("account-1"));
    }

    #[test]
    fn test_pool_entries_look_like_desktop_browsers() {
        for ua in USER_AGENT_POOL {
            assert!(ua.starts_with("Mozilla/5.0"));
            assert!(ua.contains("Windows") || ua.contains("Macintosh") || ua.contains("Linux"));
        }
    }
}
