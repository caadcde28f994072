//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use delve_core::DungeonConfig;

/// Everything the binary needs before it can start a session.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Seed for the level generator. Fixed seeds reproduce the same dungeon.
    pub seed: u64,
    pub dungeon: DungeonConfig,
    pub ui: UiConfig,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DELVE_SEED` - Generator seed (default: derived from the clock)
    /// - `DELVE_FOV_RADIUS` - Torch radius in cells (default: 10)
    /// - `DELVE_LIGHT_WALLS` - Whether walls in view are lit (default: true)
    /// - `DELVE_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `DELVE_LOG_DIR` - Directory for `delve.log`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_string());

        let seed = read("DELVE_SEED")
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(clock_seed);

        let defaults = DungeonConfig::default();
        let radius = read("DELVE_FOV_RADIUS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.fov_radius);
        let light_walls = read("DELVE_LIGHT_WALLS")
            .and_then(|value| parse_flag(&value))
            .unwrap_or(defaults.light_walls);

        let mut ui = UiConfig::default();
        if let Some(height) = read("DELVE_MESSAGE_PANEL_HEIGHT").and_then(|v| v.parse::<u16>().ok())
        {
            ui.message_panel_height = height.max(3);
        }

        Self {
            seed,
            dungeon: defaults.with_fov(radius, light_walls),
            ui,
            log_dir: read("DELVE_LOG_DIR")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
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

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
