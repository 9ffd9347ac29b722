//! Default values for all configuration settings.

/// Default TCP port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8080;

/// Default interval between dispatch ticks, in seconds.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 2;

/// Default simulation speed reported by the settings endpoint.
///
/// Served and echoed, but never applied to the tick timer.
pub const DEFAULT_SIMULATION_SPEED: f64 = 1.0;

/// Default taxi cap reported by the settings endpoint.
pub const DEFAULT_MAX_TAXIS: u32 = 10;

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "taxisim.log";
