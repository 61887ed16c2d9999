//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use boundgen_core::Config;
use std::process::ExitCode;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli, mut config: Config) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Generate {
            schema,
            out,
            strict,
            dry_run,
        } => {
            if let Some(out) = out {
                config.emit.output_dir = out;
            }
            if strict {
                config.generator.strict = true;
            }
            commands::generate::run(&schema, &config, dry_run, cli.verbose)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            schema,
            record,
            instance,
        } => commands::check::run(&schema, &record, &instance, cli.verbose),
        Commands::Inspect { schema } => {
            commands::inspect::run(&schema)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { action } => {
            route_config(action, &cli.config_file)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn route_config(action: ConfigAction, config_file: &str) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => commands::config::show(config_file)?,
        ConfigAction::Validate => commands::config::validate(config_file)?,
        ConfigAction::Init { force } => commands::config::init(config_file, force)?,
    }
    Ok(())
}
