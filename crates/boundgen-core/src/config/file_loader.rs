//! File-based configuration loading

use super::config::Config;
use super::env_loader::apply_env_overrides;
use crate::error::{BoundgenError, BoundgenResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_config_from_file(path: &Path) -> BoundgenResult<Config> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        BoundgenError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            BoundgenError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            BoundgenError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            BoundgenError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

/// Write a configuration file, in the format implied by the extension.
pub fn save_config_to_file(config: &Config, path: &Path) -> BoundgenResult<()> {
    let contents = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::to_string_pretty(config)?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)?,
        _ => toml::to_string_pretty(config)?,
    };

    fs::write(path, contents).map_err(|e| {
        BoundgenError::config_with_context(
            format!("Failed to write config file: {}", e),
            format!("Writing configuration to '{}'", path.display()),
        )
    })
}

/// Defaults, then the file (if any), then environment overrides; validated.
pub fn load_config(path: Option<&Path>) -> BoundgenResult<Config> {
    let mut config = Config::default();
    if let Some(path) = path {
        config.merge(load_config_from_file(path)?);
    }
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config_from_file(Path::new("/nonexistent/boundgen.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boundgen.toml");
        fs::write(
            &path,
            r#"
[generator]
strict = true
workers = 4

[emit]
output_dir = "src/generated"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = load_config_from_file(&path).unwrap();
        assert!(config.generator.strict);
        assert_eq!(config.generator.workers, Some(4));
        assert_eq!(config.emit.output_dir, PathBuf::from("src/generated"));
        assert_eq!(config.emit.runtime_crate, "boundgen_core");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boundgen.yaml");
        fs::write(&path, "generator:\n  parallel: false\n").unwrap();

        let config = load_config_from_file(&path).unwrap();
        assert!(!config.generator.parallel);
    }

    #[test]
    fn test_save_and_reload_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boundgen.toml");

        let mut config = Config::default();
        config.generator.workers = Some(2);
        config.logging.format = "json".to_string();
        save_config_to_file(&config, &path).unwrap();

        assert_eq!(load_config_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boundgen.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "BOUNDGEN_CONFIG");
        assert!(err.context().unwrap().contains("boundgen.json"));
    }
}
