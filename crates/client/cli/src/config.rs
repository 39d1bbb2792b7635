//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for the terminal client.
///
/// Environment variables:
/// - `TACTICS_DATA_DIR` - data directory holding `config.toml` and `scenarios/` (default: `data`)
/// - `TACTICS_SCENARIO` - scenario name under `scenarios/`; unset uses the built-in skirmish
/// - `TACTICS_CONFIG` - rule configuration file (default: `<data dir>/config.toml` if present)
/// - `TACTICS_SESSION_ID` - label for the log directory (default: timestamp)
/// - `TACTICS_MESSAGE_PANEL_HEIGHT` - message panel height in lines (default: 8)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub scenario: Option<String>,
    pub config_path: Option<PathBuf>,
    pub session_id: Option<String>,
    pub ui: UiConfig,
}

impl CliConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("TACTICS_DATA_DIR") {
            config.data_dir = dir;
        }
        config.scenario = read_env::<String>("TACTICS_SCENARIO").filter(|name| !name.is_empty());
        config.config_path = read_env::<PathBuf>("TACTICS_CONFIG");
        config.session_id = read_env::<String>("TACTICS_SESSION_ID");

        if let Some(height) = read_env::<u16>("TACTICS_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: None,
            config_path: None,
            session_id: None,
            ui: UiConfig::default(),
        }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
