use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use seasons_chess::console::Session;
use seasons_chess::core::{load_settings, settings_path, OutputFormat, Settings};

/// Four-player hot-seat chess in the terminal
#[derive(Parser, Debug)]
#[command(name = "seasons", version, about)]
struct Cli {
    /// Output format for move results
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// List legal destinations after a rejected move
    #[arg(long)]
    hints: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "seasons_engine=debug")
    #[arg(long)]
    log_level: Option<String>,

    /// Settings file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(settings_path);
    let loaded = load_settings(&path);
    let file_settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };
    let settings = file_settings.with_overrides(cli.format, cli.hints, cli.log_level);

    init_tracing(&settings.log_level)?;

    match loaded {
        Ok(Some(_)) => info!("[SETTINGS] Loaded settings from {:?}", path),
        Ok(None) => info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path),
        Err(e) => warn!(
            "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
            path, e
        ),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(settings, stdin.lock(), stdout.lock());
    session.run().context("console session failed")?;
    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
