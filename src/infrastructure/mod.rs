//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// IBGE localities API client.
pub mod ibge;
/// Navigation adapter.
pub mod navigation;
/// Option filtering.
pub mod search;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use ibge::IbgeClient;
pub use navigation::ChannelNavigator;
pub use search::FuzzySearcher;
