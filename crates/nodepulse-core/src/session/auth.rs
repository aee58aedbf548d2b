//! The authentication handshake.

use serde_json::{json, Value};

use nodepulse_types::AccountInfo;

use super::AccountSession;

impl AccountSession {
    /// Try proxies in Proxy Set order until one authentication call
    /// succeeds. First success wins permanently: no further network calls
    /// are made once authenticated, including on re-entry.
    ///
    /// An all-proxies-failed outcome is not an error; the session simply
    /// stays unauthenticated and the ping scheduler takes over.
    pub async fn authenticate(&mut self) {
        let account = self.credential.index;
        let session_url = self.endpoints.session_url.clone();
        let proxies = self.proxies.clone();

        for proxy in &proxies {
            if self.authenticated {
                break;
            }

            tracing::info!(account, proxy = %proxy, token = %self.credential.masked_token(),
                "Authenticating");

            // Informational only; None is acceptable
            let ip = self.client.resolve_ip(proxy, self.user_agent).await;
            tracing::info!(account, proxy = %proxy, ip = ?ip, "Egress IP");

            let result = self
                .client
                .perform_request(
                    &session_url,
                    &json!({}),
                    Some(proxy),
                    &self.credential.token,
                    self.user_agent,
                )
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(account, proxy = %proxy, error = %e,
                        "Authentication call failed");
                    continue;
                },
            };

            if !response.is_success_code() {
                tracing::warn!(account, proxy = %proxy, code = ?response.code,
                    "Authentication rejected by service");
                self.handle_logout(proxy);
                continue;
            }
            if response.uid().is_none() {
                tracing::warn!(account, proxy = %proxy,
                    "Authentication response lacks uid");
                self.handle_logout(proxy);
                continue;
            }

            self.account_info =
                AccountInfo::from_data(response.data.as_ref().unwrap_or(&Value::Null));
            self.authenticated = true;
            self.save_session_info();
            tracing::info!(account, proxy = %proxy, uid = %self.account_info.uid(),
                "Authenticated");
        }

        if !self.authenticated {
            tracing::warn!(account, "No proxy authenticated; proceeding unauthenticated");
        }
    }
}
