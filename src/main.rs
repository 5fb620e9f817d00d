use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ecoleta::infrastructure::config::{ConfigOrigin, LoadedConfig};
use ecoleta::infrastructure::{
    AppConfig, ChannelNavigator, CliArgs, FuzzySearcher, IbgeClient, StorageManager,
};
use ecoleta::presentation::App;
use ecoleta::presentation::theme::Theme;

fn init_logging(config: &AppConfig) -> Result<()> {
    let default_level = LevelFilter::from_level(config.log_level.to_tracing_level());
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigOrigin)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let LoadedConfig { mut config, origin } = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, origin))
}

fn log_config_origin(origin: &ConfigOrigin) {
    match origin {
        ConfigOrigin::File(path) => {
            debug!(path = %path.display(), "Loaded config file");
        }
        ConfigOrigin::CreatedDefault(path) => {
            info!(path = %path.display(), "Config file not found, wrote defaults");
        }
        ConfigOrigin::Malformed { path, reason } => {
            warn!(path = %path.display(), %reason, "Failed to parse config file, using defaults");
        }
    }
}

fn create_app(config: &AppConfig) -> Result<App> {
    let geo_client = Arc::new(IbgeClient::with_base_url(
        &config.api.base_url,
        config.api.request_timeout(),
    )?);
    let (navigator, navigation_rx) = ChannelNavigator::new();

    Ok(App::new(
        geo_client,
        Arc::new(navigator),
        navigation_rx,
        Theme::new(&config.ui.accent_color),
        FuzzySearcher::new(config.ui.fuzzy_filter),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, origin) = load_config()?;
    init_logging(&config)?;
    log_config_origin(&origin);

    info!(
        version = ecoleta::VERSION,
        api = %config.api.base_url,
        "Starting Ecoleta"
    );

    let app = create_app(&config)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    if let Some(navigation) = result? {
        println!("{}", serde_json::to_string(&navigation)?);
    }

    Ok(())
}
