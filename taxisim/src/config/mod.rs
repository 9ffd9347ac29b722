//! Configuration file handling.
//!
//! Loads server and simulation settings from an INI file with sensible
//! defaults. Settings structs live in [`settings`], constants in
//! [`defaults`], parsing in `parser`.

pub mod defaults;
mod parser;
mod settings;

pub use settings::{LoggingSettings, ServerSettings, Settings, SimulationSettings};

use std::path::Path;

use ini::Ini;
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl Settings {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parser::parse_ini(&ini)
    }
}
