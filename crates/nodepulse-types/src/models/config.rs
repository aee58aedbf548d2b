//! Session configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Timing and path knobs shared by every account session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Minimum seconds between ping rounds (and the recurring cadence).
    #[serde(default = "default_ping_interval")]
    pub ping_interval_secs: u64,
    /// Delay between account startups, to spread initial auth load.
    #[serde(default = "default_startup_stagger")]
    pub startup_stagger_secs: u64,
    /// Directory holding `proxies.txt` and the `proxies/` per-account files.
    #[serde(default = "default_proxy_dir")]
    pub proxy_dir: PathBuf,
}

fn default_ping_interval() -> u64 {
    180
}

fn default_startup_stagger() -> u64 {
    10
}

fn default_proxy_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ping_interval_secs: default_ping_interval(),
            startup_stagger_secs: default_startup_stagger(),
            proxy_dir: default_proxy_dir(),
        }
    }
}
