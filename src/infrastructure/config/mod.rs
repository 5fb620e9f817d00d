//! Application configuration.

/// Configuration model.
pub mod app_config;
/// Command-line flags.
pub mod args;
/// `config.toml` loading.
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, LogLevel, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigOrigin, LoadedConfig, StorageManager};
