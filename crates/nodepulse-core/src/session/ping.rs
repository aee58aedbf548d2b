//! The ping round and the recurring scheduler.

use serde_json::Value;
use tokio::sync::watch;
use tokio::time::Duration;

use nodepulse_types::{ConnectionState, PingFailure, PingPayload, ProxyEndpoint};

use super::AccountSession;
use crate::unix_now;

impl AccountSession {
    /// Run one ping round: one pass over all proxies, each trying the
    /// ping endpoints in priority order.
    ///
    /// The interval guard makes overlapping manual and scheduled
    /// invocations safe: a call inside the minimum interval is a no-op.
    pub async fn ping(&mut self) {
        let now = unix_now();
        if now - self.last_round_started < self.config.ping_interval_secs as f64 {
            tracing::info!(account = self.credential.index,
                "Skipping ping, interval has not elapsed yet");
            return;
        }
        self.last_round_started = now;

        // Sequential on purpose: one account's proxies share a quota.
        let proxies = self.proxies.clone();
        for (index, proxy) in proxies.iter().enumerate() {
            self.ping_proxy(index, proxy, now).await;
        }
    }

    /// Ping one proxy, walking the endpoint priority list until the first
    /// success. A failing proxy never aborts the round for the others.
    async fn ping_proxy(&mut self, index: usize, proxy: &ProxyEndpoint, round_ts: f64) {
        let account = self.credential.index;
        self.stats[index].last_ping_time = Some(round_ts);

        let ping_urls = self.endpoints.ping_urls.clone();
        let mut saw_rejection = false;

        for url in &ping_urls {
            tracing::info!(account, proxy = %proxy, url, "Pinging");

            let payload = PingPayload {
                id: self.account_info.uid(),
                browser_id: self.stats[index].clone(),
                timestamp: round_ts as i64,
            };
            let body = serde_json::to_value(&payload).unwrap_or(Value::Null);

            let result = self
                .client
                .perform_request(url, &body, Some(proxy), &self.credential.token, self.user_agent)
                .await;

            // Every endpoint attempt counts, failed or not
            self.stats[index].ping_count += 1;

            match result {
                Ok(response) if response.is_success_code() && response.has_data_payload() => {
                    self.consecutive_failures = 0;
                    self.connection_state = ConnectionState::Connected;
                    self.stats[index].successful_pings += 1;
                    self.stats[index].score = response.ip_score();
                    tracing::info!(account, proxy = %proxy,
                        score = self.stats[index].score, "Ping successful");
                    return;
                },
                Ok(response) => {
                    if response.code == Some(403) {
                        saw_rejection = true;
                    }
                    tracing::warn!(account, proxy = %proxy, url, code = ?response.code,
                        "Ping attempt failed");
                },
                Err(e) => {
                    if e.is_forbidden() {
                        saw_rejection = true;
                    }
                    tracing::warn!(account, proxy = %proxy, url, error = %e,
                        "Ping attempt failed");
                },
            }
        }

        tracing::error!(account, proxy = %proxy, "Ping failed, tried all endpoints");
        let failure = if saw_rejection { PingFailure::Rejected } else { PingFailure::Failed };
        self.handle_ping_fail(proxy, failure);
    }

    /// The recurring scheduler. Never exits on error - `ping` handles
    /// every failure internally - only on the pool's stop signal.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let interval = Duration::from_secs(self.config.ping_interval_secs);
        tracing::info!(account = self.credential.index, interval_secs = interval.as_secs(),
            "Ping loop started");
        loop {
            tokio::select! {
                () = tokio::time::sleep(interval) => {
                    self.ping().await;
                },
                _ = shutdown.changed() => {
                    tracing::info!(account = self.credential.index, "Ping loop stopping");
                    break;
                },
            }
        }
    }
}
