//! Environment variable overrides
//!
//! - `BOUNDGEN_STRICT`: `true`/`false`
//! - `BOUNDGEN_WORKERS`: worker thread cap
//! - `BOUNDGEN_OUT_DIR`: emit output directory
//! - `BOUNDGEN_LOG_LEVEL`: log level

use super::config::Config;
use crate::error::{BoundgenError, BoundgenResult};
use std::env;
use std::path::PathBuf;

/// Apply `BOUNDGEN_*` environment variables on top of `config`.
pub fn apply_env_overrides(config: &mut Config) -> BoundgenResult<()> {
    apply_overrides(config, |key| env::var(key).ok())
}

fn apply_overrides<F>(config: &mut Config, lookup: F) -> BoundgenResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(strict) = lookup("BOUNDGEN_STRICT") {
        config.generator.strict = strict
            .parse()
            .map_err(|_| BoundgenError::config(format!("Invalid BOUNDGEN_STRICT value '{}'", strict)))?;
    }

    if let Some(workers) = lookup("BOUNDGEN_WORKERS") {
        let workers: usize = workers
            .parse()
            .map_err(|_| BoundgenError::config(format!("Invalid BOUNDGEN_WORKERS value '{}'", workers)))?;
        config.generator.workers = Some(workers);
    }

    if let Some(out_dir) = lookup("BOUNDGEN_OUT_DIR") {
        config.emit.output_dir = PathBuf::from(out_dir);
    }

    if let Some(level) = lookup("BOUNDGEN_LOG_LEVEL") {
        config.logging.level = level.to_lowercase();
    }

    Ok(())
}
