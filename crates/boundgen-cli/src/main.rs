//! boundgen command-line interface
//!
//! Derives validators from constraint annotations in a schema document.
//!
//! # Commands
//!
//! - `boundgen generate <schema>`: emit Rust validator units
//! - `boundgen check <schema> --record <name> --instance <file>`: validate a
//!   JSON record instance, exit code 0 when valid
//! - `boundgen inspect <schema>`: show classification and predicate trees
//! - `boundgen config show|validate|init`: configuration management
//!
//! Set `RUST_LOG=debug` for verbose logging; without it the configured
//! `logging.level` applies.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use boundgen_core::Config;
use clap::Parser;
use std::process::ExitCode;

use args::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    // Config commands load the file themselves so a broken file can be replaced
    let config = if matches!(cli.command, Commands::Config { .. }) {
        Config::default()
    } else {
        commands::config::load(&cli.config_file)?
    };
    logging::init(&config.logging, cli.verbose);

    router::route(cli, config)
}
