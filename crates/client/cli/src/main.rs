//! Terminal client entry point.
mod app;
mod config;
mod input;
mod messages;
mod presentation;
mod state;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::CliApp;
use config::CliConfig;
use game_content::{ConfigLoader, ContentFactory};
use game_core::{GameConfig, Scenario};
use runtime::GameSession;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);

    // Setup logging to a file; stdout belongs to the TUI
    setup_logging(&session_id)?;

    let session = GameSession::builder()
        .scenario(load_scenario(&config)?)
        .config(load_rules(&config)?)
        .session_id(session_id)
        .build()?;

    CliApp::new(session, config).run()
}

fn load_scenario(config: &CliConfig) -> Result<Scenario> {
    match &config.scenario {
        Some(name) => ContentFactory::new(&config.data_dir)
            .load_scenario(name)
            .with_context(|| format!("loading scenario '{name}'")),
        None => Ok(game_content::builtin::skirmish()),
    }
}

fn load_rules(config: &CliConfig) -> Result<GameConfig> {
    if let Some(path) = &config.config_path {
        return ConfigLoader::load(path)
            .with_context(|| format!("loading rules from {}", path.display()));
    }

    let default_path = ContentFactory::new(&config.data_dir).config_path();
    if default_path.exists() {
        ConfigLoader::load(&default_path)
    } else {
        Ok(GameConfig::default())
    }
}

fn default_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

/// Setup logging to a per-session file
fn setup_logging(session_id: &str) -> Result<()> {
    // Create session-specific log directory
    let session_log_dir = log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Initialize subscriber with ONLY file layer (no stderr for TUI)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(())
}

/// Platform cache directory for logs, e.g. `~/.cache/grid-tactics/logs` on Linux.
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "grid-tactics")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/grid-tactics"))
        .join("logs")
}
