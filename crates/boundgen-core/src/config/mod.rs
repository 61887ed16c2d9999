//! Configuration management for boundgen

#[allow(clippy::module_inception)]
mod config;
mod env_loader;
mod file_loader;
mod logging_config;

pub use config::{Config, EmitConfig, GeneratorConfig};
pub use env_loader::apply_env_overrides;
pub use file_loader::{load_config, load_config_from_file, save_config_to_file};
pub use logging_config::LoggingConfig;
