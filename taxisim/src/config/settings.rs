//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic.

use super::defaults::*;

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Simulation settings
    pub simulation: SimulationSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// TCP port the server listens on
    pub port: u16,
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Seconds between dispatch ticks, applied when the simulation starts
    pub tick_interval_secs: u64,
    /// Speed factor served by the settings endpoint; not applied to the timer
    pub simulation_speed: f64,
    /// Taxi cap served by the settings endpoint; not enforced by the store
    pub max_taxis: u32,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: String,
    /// Log file name
    pub file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings { port: DEFAULT_PORT },
            simulation: SimulationSettings {
                tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
                simulation_speed: DEFAULT_SIMULATION_SPEED,
                max_taxis: DEFAULT_MAX_TAXIS,
            },
            logging: LoggingSettings {
                directory: DEFAULT_LOG_DIR.to_string(),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
