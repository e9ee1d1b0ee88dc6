//! Configuration loading.
//!
//! The tool takes no arguments. An optional `rank-monitor.toml` in the working
//! directory may point it at a different log file:
//!
//! ```toml
//! log-file = "logs/cooja_run_3.txt"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "rank-monitor.toml";

/// Log file scanned when no configuration overrides it.
pub const DEFAULT_LOG_FILE: &str = "contiki_log.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MonitorConfig {
    /// Path of the log file to scan
    pub log_file: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Returns
    /// * `Ok(MonitorConfig)` with defaults or the file's values
    /// * `Err` if the file exists but cannot be read or parsed
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", config_path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config file: {}", config_path.display()));
            }
        };

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }
}
