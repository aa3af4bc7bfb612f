use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use snake_tui::app::App;
use snake_tui::game::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Terminal Snake with levels, difficulty settings, and pause")]
struct Cli {
    /// Write diagnostic logs to this file (the terminal itself is taken
    /// over by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut app = App::new(GameConfig::default());
    app.run().await
}
