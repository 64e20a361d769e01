//! Console settings
//!
//! Loads [`Settings`] from a JSON file. The file is optional and read-only:
//! nothing is ever written back, and command-line flags override whatever it
//! contains.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/seasons-chess/settings.json` on Linux. Falls back to a local
//! `settings.json` if the system config dir cannot be found.
//!
//! # Error Handling
//!
//! A missing file is not an error. A file that cannot be read or parsed is
//! reported to the caller, which logs it and carries on with defaults.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::error::CoreResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// How move results and listings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board diagrams and plain sentences
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// User preferences for the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format for results
    pub format: OutputFormat,

    /// Whether to list legal destinations when a move is rejected
    pub show_hints: bool,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_hints: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        hints: bool,
        log_level: Option<String>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if hints {
            self.show_hints = true;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "seasons", "seasons-chess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_settings(path: &Path) -> CoreResult<Option<Settings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(Some(settings))
}
