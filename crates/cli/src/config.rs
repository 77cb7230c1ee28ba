//! Runtime configuration: environment first, command-line flags on top.

use std::path::PathBuf;

use stockroom_core::Quantity;
use stockroom_inventory::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_observability::LogFormat;

pub const FILE_VAR: &str = "STOCKROOM_FILE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub file: PathBuf,
    pub low_stock_threshold: Quantity,
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Logging isn't set up
    /// yet at that point, so the caller reports these after `init`.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: Quantity::from(DEFAULT_LOW_STOCK_THRESHOLD),
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Invalid values fall back to
    /// defaults and leave a warning behind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup(FILE_VAR).filter(|v| !v.trim().is_empty()) {
            config.file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match raw.parse::<Quantity>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(err) => config.warnings.push(format!(
                    "{LOW_STOCK_THRESHOLD_VAR}={raw:?} ignored ({err}); using {DEFAULT_LOW_STOCK_THRESHOLD}"
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(err) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}={raw:?} ignored ({err}); using text")),
            }
        }

        config
    }

    pub fn with_overrides(mut self, file: Option<PathBuf>, log_format: Option<LogFormat>) -> Self {
        if let Some(file) = file {
            self.file = file;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}
