//! The session pool: one task per account, staggered startup, graceful
//! shutdown via a watch channel.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use nodepulse_types::{AccountCredential, SessionConfig};

use super::AccountSession;
use crate::upstream::{ApiClient, ApiEndpoints};

/// Owns the running session tasks and their stop signal.
pub struct SessionPool {
    client: Arc<ApiClient>,
    endpoints: ApiEndpoints,
    config: SessionConfig,
    shutdown_tx: watch::Sender<bool>,
    tasks: Vec<(u32, JoinHandle<()>)>,
}

impl SessionPool {
    pub fn new(client: Arc<ApiClient>, endpoints: ApiEndpoints, config: SessionConfig) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { client, endpoints, config, shutdown_tx, tasks: Vec::new() }
    }

    /// Bring up one session per credential, in file order, sleeping the
    /// configured stagger between accounts to spread the initial
    /// authentication load.
    ///
    /// An account whose setup fails (no proxies) is logged and skipped;
    /// it never affects the others. Returns the number of sessions that
    /// reached their scheduler.
    pub async fn start(&mut self, credentials: Vec<AccountCredential>) -> usize {
        let total = credentials.len();
        let mut started = 0;

        for (position, credential) in credentials.into_iter().enumerate() {
            let account = credential.index;
            let mut session = AccountSession::new(
                credential,
                Arc::clone(&self.client),
                self.endpoints.clone(),
                self.config.clone(),
            );

            match session.init().await {
                Ok(()) => {
                    let shutdown_rx = self.shutdown_tx.subscribe();
                    self.tasks.push((account, tokio::spawn(session.run(shutdown_rx))));
                    started += 1;
                    tracing::info!(account, "Session started");
                },
                Err(e) => {
                    tracing::error!(account, error = %e, "Account setup failed, skipping");
                },
            }

            if position + 1 < total {
                tokio::time::sleep(Duration::from_secs(self.config.startup_stagger_secs)).await;
            }
        }

        tracing::info!(started, total, "Session pool running");
        started
    }

    /// Raise the stop signal for every session loop.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Await all session tasks, draining in-flight rounds.
    pub async fn join(&mut self) {
        for (account, task) in self.tasks.drain(..) {
            if let Err(e) = task.await {
                tracing::error!(account, error = %e, "Session task aborted");
            }
        }
    }
}
