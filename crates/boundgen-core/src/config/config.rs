//! Configuration model

use super::logging_config::LoggingConfig;
use crate::error::{BoundgenError, BoundgenResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generation pass settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fail the pass when any warning notice is raised
    pub strict: bool,
    /// Process records on worker threads
    pub parallel: bool,
    /// Worker thread cap; defaults to the available parallelism
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            parallel: true,
            workers: None,
        }
    }
}

/// Source emitter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Directory emitted units are written to
    pub output_dir: PathBuf,
    /// Crate path the emitted code imports runtime types from
    pub runtime_crate: String,
    /// Path prefix prepended to a record's namespace to reach its type
    pub record_path_prefix: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            runtime_crate: "boundgen_core".to_string(),
            record_path_prefix: "crate".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub emit: EmitConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Check value ranges and non-empty settings
    pub fn validate(&self) -> BoundgenResult<()> {
        if self.generator.workers == Some(0) {
            return Err(BoundgenError::config("generator.workers must be at least 1"));
        }
        if self.emit.runtime_crate.trim().is_empty() {
            return Err(BoundgenError::config("emit.runtime_crate cannot be empty"));
        }
        if self.emit.output_dir.as_os_str().is_empty() {
            return Err(BoundgenError::config("emit.output_dir cannot be empty"));
        }
        self.logging.validate()
    }

    /// Overlay another configuration. Only non-default values of `other` win.
    pub fn merge(&mut self, other: Config) {
        let defaults = Config::default();

        if other.generator.strict {
            self.generator.strict = true;
        }
        if other.generator.parallel != defaults.generator.parallel {
            self.generator.parallel = other.generator.parallel;
        }
        if other.generator.workers.is_some() {
            self.generator.workers = other.generator.workers;
        }

        if other.emit.output_dir != defaults.emit.output_dir {
            self.emit.output_dir = other.emit.output_dir;
        }
        if other.emit.runtime_crate != defaults.emit.runtime_crate {
            self.emit.runtime_crate = other.emit.runtime_crate;
        }
        if other.emit.record_path_prefix != defaults.emit.record_path_prefix {
            self.emit.record_path_prefix = other.emit.record_path_prefix;
        }

        self.logging.merge(other.logging);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.generator.parallel);
        assert_eq!(config.emit.runtime_crate, "boundgen_core");
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = Config::default();
        config.generator.workers = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_keeps_base_for_defaults() {
        let mut base = Config::default();
        base.emit.output_dir = PathBuf::from("src/generated");

        let mut overlay = Config::default();
        overlay.generator.strict = true;
        overlay.generator.workers = Some(2);
        base.merge(overlay);

        assert!(base.generator.strict);
        assert_eq!(base.generator.workers, Some(2));
        assert_eq!(base.emit.output_dir, PathBuf::from("src/generated"));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "generator": { "strict": true } }"#).unwrap();
        assert!(config.generator.strict);
        assert!(config.generator.parallel);
        assert_eq!(config.logging.level, "info");
    }
}
