//! INI parsing logic for converting `Ini` → `Settings`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::settings::Settings;
use super::ConfigError;

/// Parse an `Ini` object into `Settings`.
///
/// Starts from `Settings::default()` and overlays any values found in
/// the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("port") {
            settings.server.port = v.parse().map_err(|_| ConfigError::InvalidValue {
                section: "server".to_string(),
                key: "port".to_string(),
                value: v.to_string(),
                reason: "expected a TCP port number (1-65535)".to_string(),
            })?;
        }
    }

    // [simulation] section
    if let Some(section) = ini.section(Some("simulation")) {
        if let Some(v) = section.get("tick_interval_secs") {
            let secs: u64 = v.parse().map_err(|_| ConfigError::InvalidValue {
                section: "simulation".to_string(),
                key: "tick_interval_secs".to_string(),
                value: v.to_string(),
                reason: "expected a whole number of seconds".to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    section: "simulation".to_string(),
                    key: "tick_interval_secs".to_string(),
                    value: v.to_string(),
                    reason: "must be at least 1 second".to_string(),
                });
            }
            settings.simulation.tick_interval_secs = secs;
        }
        if let Some(v) = section.get("simulation_speed") {
            settings.simulation.simulation_speed =
                v.parse().map_err(|_| ConfigError::InvalidValue {
                    section: "simulation".to_string(),
                    key: "simulation_speed".to_string(),
                    value: v.to_string(),
                    reason: "expected a number".to_string(),
                })?;
        }
        if let Some(v) = section.get("max_taxis") {
            settings.simulation.max_taxis =
                v.parse().map_err(|_| ConfigError::InvalidValue {
                    section: "simulation".to_string(),
                    key: "max_taxis".to_string(),
                    value: v.to_string(),
                    reason: "expected a whole number".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                settings.logging.directory = v.to_string();
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                settings.logging.file = v.to_string();
            }
        }
    }

    Ok(settings)
}
