//! Terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod message;
mod presentation;

use anyhow::Result;
use app::App;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(seed = config.seed, "Starting delve");
    App::new(&config)?.run()
}
