//! Configuration management commands

use crate::args::DEFAULT_CONFIG_FILE;
use crate::console::CLIConsole;
use boundgen_core::{
    BoundgenError, BoundgenResult, Config,
    config::{load_config, load_config_from_file, save_config_to_file},
};
use std::path::{Path, PathBuf};

/// User-level config, used when the default file is absent from the working directory
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("boundgen").join(DEFAULT_CONFIG_FILE))
}

fn resolve(config_file: &str) -> Option<PathBuf> {
    let path = PathBuf::from(config_file);
    if path.exists() {
        return Some(path);
    }
    if config_file == DEFAULT_CONFIG_FILE {
        return global_config_path().filter(|p| p.exists());
    }
    None
}

/// Load the effective configuration: defaults, file, then environment.
pub fn load(config_file: &str) -> BoundgenResult<Config> {
    let path = resolve(config_file);
    if path.is_none() && config_file != DEFAULT_CONFIG_FILE {
        return Err(BoundgenError::config(format!(
            "Configuration file not found: {config_file}"
        )));
    }
    load_config(path.as_deref())
}

/// Show current configuration
pub fn show(config_file: &str) -> BoundgenResult<()> {
    let console = CLIConsole::new(true);
    console.print_header("Configuration");

    let path = resolve(config_file);
    match &path {
        Some(path) => console.success(&format!("Loaded configuration from: {}", path.display())),
        None => {
            console.warn(&format!("Configuration file not found: {config_file}"));
            console.info("Using default configuration");
        }
    }

    let config = load_config(path.as_deref())?;
    print_config(&console, &config);
    Ok(())
}

/// Validate configuration
pub fn validate(config_file: &str) -> BoundgenResult<()> {
    let console = CLIConsole::new(true);
    console.print_header("Configuration Validation");

    let path = Path::new(config_file);
    if !path.exists() {
        return Err(BoundgenError::config(format!(
            "Configuration file not found: {config_file}"
        )));
    }

    console.info(&format!("Validating configuration file: {config_file}"));
    let config = load_config_from_file(path).inspect_err(|e| {
        console.error(&format!("Failed to load configuration: {e}"));
    })?;
    console.success("Configuration file loaded successfully");

    config.validate().inspect_err(|e| {
        console.error(&format!("Configuration validation failed: {e}"));
    })?;
    console.success("Configuration is valid");

    console.print_separator();
    print_config(&console, &config);
    Ok(())
}

/// Initialize a new configuration file
pub fn init(config_file: &str, force: bool) -> BoundgenResult<()> {
    let console = CLIConsole::new(true);
    console.print_header("Configuration Initialization");

    let path = Path::new(config_file);
    if path.exists() && !force {
        console.error(&format!("Configuration file already exists: {config_file}"));
        console.info("Use --force to overwrite");
        return Err(BoundgenError::config("Configuration file already exists"));
    }

    save_config_to_file(&Config::default(), path)?;

    console.success(&format!("Created configuration file: {config_file}"));
    Ok(())
}

fn print_config(console: &CLIConsole, config: &Config) {
    let workers = config
        .generator
        .workers
        .map_or_else(|| "auto".to_string(), |n| n.to_string());

    console.print_field("generator.strict", &config.generator.strict.to_string());
    console.print_field("generator.parallel", &config.generator.parallel.to_string());
    console.print_field("generator.workers", &workers);
    console.print_field("emit.output_dir", &config.emit.output_dir.display().to_string());
    console.print_field("emit.runtime_crate", &config.emit.runtime_crate);
    console.print_field("emit.record_path_prefix", &config.emit.record_path_prefix);
    console.print_field("logging.level", &config.logging.level);
    console.print_field("logging.format", &config.logging.format);
}
