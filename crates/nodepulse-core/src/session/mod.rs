//! The per-account session state machine.
//!
//! One [`AccountSession`] owns everything for one account: its Proxy Set,
//! the index-aligned stats, its connection state, and the authenticated
//! identity. Sessions never share mutable state; after `init` each one is
//! moved into its own task by the [`SessionPool`].

mod auth;
mod ping;
mod pool;

pub use pool::SessionPool;

use std::sync::Arc;

use nodepulse_types::{
    AccountCredential, AccountInfo, ConnectionState, PingFailure, ProxyEndpoint, ProxyStats,
    SessionConfig,
};

use crate::modules::proxies::load_proxies;
use crate::unix_now;
use crate::upstream::user_agent::user_agent_for_account;
use crate::upstream::{ApiClient, ApiEndpoints};

/// Consecutive round failures that flip the account to DISCONNECTED.
const DISCONNECT_THRESHOLD: u32 = 2;

/// One account's presence session.
pub struct AccountSession {
    pub(crate) credential: AccountCredential,
    pub(crate) client: Arc<ApiClient>,
    pub(crate) endpoints: ApiEndpoints,
    pub(crate) config: SessionConfig,
    pub(crate) proxies: Vec<ProxyEndpoint>,
    /// Index-aligned with `proxies`.
    pub(crate) stats: Vec<ProxyStats>,
    pub(crate) account_info: AccountInfo,
    pub(crate) connection_state: ConnectionState,
    pub(crate) authenticated: bool,
    /// Reset only by a successful ping, never by logout or disconnect.
    pub(crate) consecutive_failures: u32,
    /// Start of the most recent ping round; enforces the minimum
    /// inter-round interval.
    pub(crate) last_round_started: f64,
    pub(crate) user_agent: &'static str,
}

impl AccountSession {
    pub fn new(
        credential: AccountCredential,
        client: Arc<ApiClient>,
        endpoints: ApiEndpoints,
        config: SessionConfig,
    ) -> Self {
        let user_agent = user_agent_for_account(&format!("account-{}", credential.index));
        Self {
            credential,
            client,
            endpoints,
            config,
            proxies: Vec::new(),
            stats: Vec::new(),
            account_info: AccountInfo::default(),
            connection_state: ConnectionState::NoConnection,
            authenticated: false,
            consecutive_failures: 0,
            last_round_started: 0.0,
            user_agent,
        }
    }

    /// Bring the session up: load proxies, authenticate, run the first
    /// ping round.
    ///
    /// Only proxy loading can fail here; an account where every proxy
    /// refuses authentication still proceeds to scheduling (its pings
    /// drive the failure-counting path).
    pub async fn init(&mut self) -> Result<(), nodepulse_types::LoadError> {
        self.proxies = load_proxies(&self.config.proxy_dir, self.credential.index).await?;
        let now = unix_now();
        self.stats = self.proxies.iter().map(|_| ProxyStats::new(now)).collect();
        self.authenticate().await;
        self.ping().await;
        Ok(())
    }

    /// Drop the authenticated identity and connection state.
    ///
    /// Pure state reset, no network call. The consecutive-failure counter
    /// is deliberately left alone.
    pub(crate) fn handle_logout(&mut self, proxy: &ProxyEndpoint) {
        self.connection_state = ConnectionState::NoConnection;
        self.account_info.clear();
        self.authenticated = false;
        tracing::info!(account = self.credential.index, proxy = %proxy,
            "Logged out and cleared session info");
    }

    /// Record a fully-failed proxy round.
    pub(crate) fn handle_ping_fail(&mut self, proxy: &ProxyEndpoint, failure: PingFailure) {
        self.consecutive_failures += 1;
        match failure {
            PingFailure::Rejected => self.handle_logout(proxy),
            PingFailure::Failed => {
                if self.consecutive_failures >= DISCONNECT_THRESHOLD {
                    self.connection_state = ConnectionState::Disconnected;
                    tracing::warn!(account = self.credential.index,
                        failures = self.consecutive_failures, "Connection marked DISCONNECTED");
                }
            },
        }
    }

    /// Persistence hook. Intentionally a no-op: session state does not
    /// survive restarts.
    pub(crate) fn save_session_info(&self) {}

    pub fn account_index(&self) -> u32 {
        self.credential.index
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn account_info(&self) -> &AccountInfo {
        &self.account_info
    }

    pub fn proxies(&self) -> &[ProxyEndpoint] {
        &self.proxies
    }

    pub fn stats(&self) -> &[ProxyStats] {
        &self.stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare_session() -> AccountSession {
        let client = Arc::new(ApiClient::new().unwrap());
        AccountSession::new(
            AccountCredential::new("test-token", 1),
            client,
            ApiEndpoints::fixed("http://unused.test/session", vec![]),
            SessionConfig::default(),
        )
    }

    fn proxy() -> ProxyEndpoint {
        ProxyEndpoint::new("http://p:8080")
    }

    #[tokio::test]
    async fn test_two_failures_disconnect() {
        let mut session = bare_session();
        session.connection_state = ConnectionState::Connected;

        session.handle_ping_fail(&proxy(), PingFailure::Failed);
        assert_eq!(session.connection_state(), ConnectionState::Connected);
        assert_eq!(session.consecutive_failures, 1);

        session.handle_ping_fail(&proxy(), PingFailure::Failed);
        assert_eq!(session.connection_state(), ConnectionState::Disconnected);

        // Counter keeps growing past the threshold until a success resets it
        session.handle_ping_fail(&proxy(), PingFailure::Failed);
        assert_eq!(session.consecutive_failures, 3);
        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn test_rejection_overrides_counter() {
        let mut session = bare_session();
        session.connection_state = ConnectionState::Connected;
        session.authenticated = true;
        session.account_info = AccountInfo::from_data(&json!({"uid": "u1"}));

        session.handle_ping_fail(&proxy(), PingFailure::Rejected);
        assert_eq!(session.connection_state(), ConnectionState::NoConnection);
        assert!(!session.is_authenticated());
        assert!(session.account_info().is_empty());
        // Logout does not reset the failure counter
        assert_eq!(session.consecutive_failures, 1);
    }

    #[tokio::test]
    async fn test_logout_is_pure_state_reset() {
        let mut session = bare_session();
        session.connection_state = ConnectionState::Disconnected;
        session.authenticated = true;
        session.account_info = AccountInfo::from_data(&json!({"uid": "u1"}));
        session.consecutive_failures = 5;

        session.handle_logout(&proxy());
        assert_eq!(session.connection_state(), ConnectionState::NoConnection);
        assert!(!session.is_authenticated());
        assert!(session.account_info().is_empty());
        assert_eq!(session.consecutive_failures, 5);
    }

    #[tokio::test]
    async fn test_same_account_same_user_agent() {
        let a = bare_session();
        let b = bare_session();
        assert_eq!(a.user_agent, b.user_agent);
    }
}
