//! Core module - error types and settings for the console front end
//!
//! - [`CoreError`] - I/O, serialization and command parsing failures
//! - [`Settings`] - user preferences loaded from `settings.json` and
//!   overridden by command-line flags

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{load_settings, settings_path, OutputFormat, Settings};
