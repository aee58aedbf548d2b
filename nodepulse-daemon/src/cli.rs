use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nodepulse",
    about = "NodePulse - keeps many proxied presence sessions alive",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Credential file: one bearer token per line, order = account index
    #[arg(long, env = "NODEPULSE_TOKENS_FILE", default_value = "tokens.txt")]
    pub tokens: PathBuf,

    /// Directory holding proxies.txt and the proxies/ per-account files
    #[arg(long, env = "NODEPULSE_PROXY_DIR", default_value = ".")]
    pub proxy_dir: PathBuf,

    /// Seconds between ping rounds
    #[arg(long, default_value = "180")]
    pub ping_interval_secs: u64,

    /// Seconds between account startups
    #[arg(long, default_value = "10")]
    pub startup_stagger_secs: u64,

    /// Log level filter (e.g. info, debug, nodepulse_core=debug)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
