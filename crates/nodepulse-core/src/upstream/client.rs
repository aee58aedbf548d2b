//! The process-wide HTTP requester.
//!
//! One [`ApiClient`] is constructed at startup and shared by reference
//! with every session. It is stateless with respect to account identity:
//! it owns a direct `reqwest::Client` plus a cache of per-proxy clients
//! keyed by normalized proxy URL, and implements the retry policy that
//! every session/ping call goes through.
//!
//! Policy: HTTP 403 short-circuits with no retry (authoritative
//! rejection); everything else sleeps `2^attempt` seconds and retries up
//! to [`MAX_REQUEST_RETRIES`] attempts.

use std::collections::HashMap;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Duration;

use nodepulse_types::{ApiResponse, ProxyEndpoint, RequestError};

use crate::modules::proxies::parse_proxy_url;
use crate::upstream::headers::build_headers;
use crate::upstream::user_agent::default_user_agent;

/// Attempts per request before giving up.
pub const MAX_REQUEST_RETRIES: u32 = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";
const IP_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-wide requester with a per-proxy client cache.
pub struct ApiClient {
    /// Direct (no-proxy) client
    direct_client: Client,
    /// Cached proxy clients keyed by normalized proxy URL
    proxy_clients: RwLock<HashMap<String, Client>>,
}

impl ApiClient {
    pub fn new() -> Result<Self, String> {
        let direct_client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(default_user_agent())
            .build()
            .map_err(|e| format!("Failed to build direct client: {e}"))?;
        Ok(Self { direct_client, proxy_clients: RwLock::new(HashMap::new()) })
    }

    /// Get or create a `reqwest::Client` routed through the given proxy.
    async fn get_or_create_client(
        &self,
        proxy: &ProxyEndpoint,
        user_agent: &str,
    ) -> Result<Client, String> {
        let proxy_url = parse_proxy_url(proxy.as_str())?;

        // Fast path: check read lock
        {
            let clients = self.proxy_clients.read().await;
            if let Some(client) = clients.get(&proxy_url) {
                return Ok(client.clone());
            }
        }

        // Slow path: create under write lock
        let mut clients = self.proxy_clients.write().await;
        // Double-check after acquiring write lock
        if let Some(client) = clients.get(&proxy_url) {
            return Ok(client.clone());
        }

        let routed = reqwest::Proxy::all(&proxy_url)
            .map_err(|e| format!("Invalid proxy URL '{proxy_url}': {e}"))?;

        let proxy_url_owned = proxy_url.clone();
        let user_agent = user_agent.to_string();
        let new_client = tokio::task::spawn_blocking(move || {
            Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(REQUEST_TIMEOUT)
                .user_agent(user_agent)
                .proxy(routed)
                .build()
                .map_err(|e| {
                    format!("Failed to build proxy client for '{proxy_url_owned}': {e}")
                })
        })
        .await
        .map_err(|e| format!("spawn_blocking panicked: {e}"))??;

        tracing::debug!(proxy_url = %proxy_url, "Created new proxy client");
        clients.insert(proxy_url, new_client.clone());
        Ok(new_client)
    }

    /// POST `payload` to `url` through `proxy` with the API fingerprint.
    ///
    /// Returns the parsed body on HTTP 200, `Err(Forbidden)` immediately
    /// on HTTP 403, and otherwise retries with exponential backoff until
    /// the attempt budget is spent. The sleep after the final attempt is
    /// elided.
    pub async fn perform_request(
        &self,
        url: &str,
        payload: &Value,
        proxy: Option<&ProxyEndpoint>,
        token: &str,
        user_agent: &str,
    ) -> Result<ApiResponse, RequestError> {
        let headers = build_headers(token)?;
        let mut last_failure = RequestError::Transport {
            attempts: MAX_REQUEST_RETRIES,
            message: "no attempt made".to_string(),
        };

        for attempt in 0..MAX_REQUEST_RETRIES {
            let outcome = self.attempt_once(url, payload, proxy, &headers, user_agent).await;
            match outcome {
                Ok(response) => return Ok(response),
                Err(RequestError::Forbidden) => {
                    tracing::warn!(url, proxy = ?proxy.map(ProxyEndpoint::as_str),
                        "Request rejected with HTTP 403, not retrying");
                    return Err(RequestError::Forbidden);
                },
                Err(failure) => {
                    tracing::warn!(url, attempt = attempt + 1,
                        proxy = ?proxy.map(ProxyEndpoint::as_str),
                        error = %failure, "Request attempt failed");
                    last_failure = failure;
                },
            }
            if attempt + 1 < MAX_REQUEST_RETRIES {
                tokio::time::sleep(Duration::from_secs(1 << attempt)).await;
            }
        }

        tracing::error!(url, attempts = MAX_REQUEST_RETRIES,
            proxy = ?proxy.map(ProxyEndpoint::as_str), "Request failed after all attempts");
        Err(last_failure)
    }

    async fn attempt_once(
        &self,
        url: &str,
        payload: &Value,
        proxy: Option<&ProxyEndpoint>,
        headers: &reqwest::header::HeaderMap,
        user_agent: &str,
    ) -> Result<ApiResponse, RequestError> {
        let client = match proxy {
            Some(p) => {
                self.get_or_create_client(p, user_agent).await.map_err(|message| {
                    RequestError::Transport { attempts: MAX_REQUEST_RETRIES, message }
                })?
            },
            None => self.direct_client.clone(),
        };

        let response = client
            .post(url)
            .headers(headers.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| RequestError::Transport {
                attempts: MAX_REQUEST_RETRIES,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(RequestError::Forbidden);
        }
        if status != StatusCode::OK {
            return Err(RequestError::Status {
                status: status.as_u16(),
                attempts: MAX_REQUEST_RETRIES,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RequestError::Malformed { message: e.to_string() })?;
        Ok(ApiResponse::from_value(&body))
    }

    /// Best-effort lookup of the proxy's observed public IP.
    ///
    /// Informational only: any failure is logged and collapses to `None`.
    pub async fn resolve_ip(&self, proxy: &ProxyEndpoint, user_agent: &str) -> Option<String> {
        let client = match self.get_or_create_client(proxy, user_agent).await {
            Ok(client) => client,
            Err(e) => {
                tracing::debug!(proxy = %proxy, error = %e, "IP lookup skipped");
                return None;
            },
        };

        let result = client.get(IP_LOOKUP_URL).timeout(IP_LOOKUP_TIMEOUT).send().await;
        let body: Value = match result {
            Ok(resp) if resp.status() == StatusCode::OK => resp.json().await.ok()?,
            Ok(resp) => {
                tracing::debug!(proxy = %proxy, status = %resp.status(), "IP lookup failed");
                return None;
            },
            Err(e) => {
                tracing::debug!(proxy = %proxy, error = %e, "IP lookup failed");
                return None;
            },
        };
        body.get("ip").and_then(Value::as_str).map(str::to_string)
    }
}
