//! minesettings - a terminal settings form for a minesweeper game.
//!
//! This is the main binary: it parses the command line, sets up logging,
//! loads the configuration and runs the form.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use minesettings_config::Config;
use minesettings_tui::{App, terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Log file used when `--debug` is given without a path.
const DEFAULT_LOG_FILE: &str = "minesettings.log";

#[derive(Debug, Parser)]
#[command(
    name = "minesettings",
    version,
    about = "Pick a grid size and mines amount for a new minesweeper game"
)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Viewport width in pixels, instead of measuring the terminal.
    #[arg(long, value_name = "PX")]
    viewport_width: Option<u32>,

    /// Write debug logs to a file.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE
    )]
    debug: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.debug {
        setup_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::load().context("loading configuration")?,
    };

    let viewport_width_px = match cli.viewport_width {
        Some(width) => width,
        None => terminal::viewport_width_px(config.cell_width_px)?,
    };
    tracing::info!(viewport_width_px, "starting settings form");

    let mut app = App::new(&config, viewport_width_px)?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends log records to `path`. Events from dependencies are limited to
/// errors.
fn setup_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("installing logger")
}
