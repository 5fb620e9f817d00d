use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags; each overrides the matching `config.toml` value.
#[derive(Debug, Parser)]
#[command(
    name = "ecoleta",
    version,
    about = "Pick your state and city to find collection points",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the IBGE localities API.
    #[arg(long, value_name = "URL", env = "ECOLETA_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Fuzzy-match typed filters.
    #[arg(long)]
    pub fuzzy_filter: Option<bool>,
}
