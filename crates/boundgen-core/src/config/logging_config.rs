//! Logging configuration

use crate::error::{BoundgenError, BoundgenResult};
use serde::{Deserialize, Serialize};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Merge with another logging config
    pub fn merge(&mut self, other: LoggingConfig) {
        let defaults = LoggingConfig::default();
        if !other.level.is_empty() && other.level != defaults.level {
            self.level = other.level;
        }
        if !other.format.is_empty() && other.format != defaults.format {
            self.format = other.format;
        }
    }

    pub fn validate(&self) -> BoundgenResult<()> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(BoundgenError::config(format!(
                "Unknown log level '{}', expected one of: {}",
                self.level,
                LEVELS.join(", ")
            )));
        }
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(BoundgenError::config(format!(
                "Unknown log format '{}', expected one of: {}",
                self.format,
                FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
