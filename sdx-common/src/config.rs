//! Configuration loading and resolution
//!
//! Both configurable values (store path, listening port) resolve in
//! priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use std::path::PathBuf;

/// Environment variable naming the SQLite database file
pub const DATABASE_ENV_VAR: &str = "SDX_DATABASE";
/// Environment variable naming the HTTP listening port
pub const PORT_ENV_VAR: &str = "SDX_PORT";

/// Default listening port for sdx-api
pub const DEFAULT_PORT: u16 = 3001;
/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "shinobidex.db";

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve configuration from CLI arguments, environment, config file,
    /// and compiled defaults, in that order.
    pub fn resolve(cli_database: Option<&str>, cli_port: Option<u16>) -> Result<Self> {
        Ok(Self {
            database_path: resolve_database_path(cli_database),
            port: resolve_port(cli_port)?,
        })
    }
}

/// Resolve the database file path
pub fn resolve_database_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(value) = config_file_value("database") {
        if let Some(path) = value.as_str() {
            return PathBuf::from(path);
        }
    }

    // Priority 4: Compiled default
    PathBuf::from(DEFAULT_DATABASE)
}

/// Resolve the HTTP listening port
pub fn resolve_port(cli_arg: Option<u16>) -> Result<u16> {
    // Priority 1: Command-line argument
    if let Some(port) = cli_arg {
        return Ok(port);
    }

    // Priority 2: Environment variable
    if let Ok(raw) = std::env::var(PORT_ENV_VAR) {
        if !raw.is_empty() {
            return raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("Invalid {}: {}", PORT_ENV_VAR, raw)));
        }
    }

    // Priority 3: TOML config file
    if let Some(value) = config_file_value("port") {
        if let Some(port) = value.as_integer() {
            if port > 0 && port <= u16::MAX as i64 {
                return Ok(port as u16);
            }
            return Err(Error::Config(format!("Port out of range: {}", port)));
        }
    }

    // Priority 4: Compiled default
    Ok(DEFAULT_PORT)
}

/// Read a single key from the config file, if the file exists and parses
fn config_file_value(key: &str) -> Option<toml::Value> {
    let config_path = config_file_path()?;
    let content = std::fs::read_to_string(&config_path).ok()?;
    let parsed = toml::from_str::<toml::Value>(&content).ok()?;
    parsed.get(key).cloned()
}

/// Platform config file location: `<config dir>/shinobidex/config.toml`,
/// with `/etc/shinobidex/config.toml` as a system-wide fallback on Linux
fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("shinobidex").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }
    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/shinobidex/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }
    None
}
