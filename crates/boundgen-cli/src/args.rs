//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "boundgen.toml";

#[derive(Parser)]
#[command(name = "boundgen")]
#[command(about = "Derive validators from field constraint annotations")]
#[command(
    long_about = r#"Derive validators from field constraint annotations

USAGE:
  boundgen generate schema.toml --out src/generated
  boundgen check schema.toml --record User --instance user.json
  boundgen inspect schema.toml
  boundgen config init"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate validator source units for every record in a schema
    Generate {
        /// Schema document (JSON, TOML or YAML)
        schema: PathBuf,

        /// Output directory, overrides emit.output_dir
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Fail when any warning notice is raised
        #[arg(long)]
        strict: bool,

        /// Render units without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a JSON record instance against a record of the schema
    Check {
        /// Schema document (JSON, TOML or YAML)
        schema: PathBuf,

        /// Record name, simple or namespace-qualified
        #[arg(long, short)]
        record: String,

        /// JSON file holding the record instance
        #[arg(long, short)]
        instance: PathBuf,
    },

    /// Show how each field was classified and which predicates it received
    Inspect {
        /// Schema document (JSON, TOML or YAML)
        schema: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display current configuration settings
    Show,

    /// Validate configuration file for errors
    Validate,

    /// Create a new configuration file with defaults
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from(["boundgen", "generate", "schema.toml", "--out", "gen", "--strict"]);
        match cli.command {
            Commands::Generate {
                schema,
                out,
                strict,
                dry_run,
            } => {
                assert_eq!(schema, PathBuf::from("schema.toml"));
                assert_eq!(out, Some(PathBuf::from("gen")));
                assert!(strict);
                assert!(!dry_run);
            }
            _ => panic!("expected generate"),
        }
        assert_eq!(cli.config_file, DEFAULT_CONFIG_FILE);
    }

    #[test]
    fn test_parse_check_with_global_config() {
        let cli = Cli::parse_from([
            "boundgen",
            "check",
            "schema.json",
            "--record",
            "User",
            "--instance",
            "user.json",
            "--config-file",
            "custom.yaml",
        ]);
        assert!(matches!(cli.command, Commands::Check { ref record, .. } if record == "User"));
        assert_eq!(cli.config_file, "custom.yaml");
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["boundgen", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init { force: true }
            }
        ));
    }
}
