//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validate::ValidateCommand;
use crate::entity::EntityKind;

#[derive(Parser)]
#[command(name = "erdb")]
#[command(about = "Elden Ring data generator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate entity documents from game data
    #[command(visible_alias = "g")]
    Generate {
        /// Entity types to generate (all when omitted)
        #[arg(value_enum)]
        entities: Vec<EntityKind>,

        /// Game version: a version number, "latest" or "all"
        #[arg(long = "version", default_value = "latest")]
        game_version: String,

        /// Game data directory (uses configured default if not provided)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Schema directory (uses configured default if not provided)
        #[arg(long)]
        schema_dir: Option<PathBuf>,

        /// Output directory (uses configured default if not provided)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        minimize: bool,
    },

    /// Validate external numeric tables
    #[command(visible_alias = "v")]
    Validate {
        #[command(subcommand)]
        command: ValidateCommand,
    },

    /// List available entity types
    #[command(visible_alias = "ls")]
    List,

    /// Generate entity documents and import them into a Directus instance
    Import {
        /// Entity types to import (all when omitted)
        #[arg(value_enum)]
        entities: Vec<EntityKind>,

        /// Game version: a version number or "latest"
        #[arg(long = "version", default_value = "latest")]
        game_version: String,

        /// Game data directory (uses configured default if not provided)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Schema directory (uses configured default if not provided)
        #[arg(long)]
        schema_dir: Option<PathBuf>,

        /// Directus endpoint (uses configured default if not provided)
        #[arg(long)]
        endpoint: Option<String>,

        /// Directus account email (uses configured default if not provided)
        #[arg(long)]
        email: Option<String>,

        /// Directus account password
        #[arg(long, env = "ERDB_CMS_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Folder collection the imported collections are grouped under
        #[arg(long, default_value = "erdb")]
        folder: String,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default game data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Set default schema directory
        #[arg(long)]
        schema_dir: Option<PathBuf>,

        /// Set default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Set default Directus endpoint
        #[arg(long)]
        cms_endpoint: Option<String>,

        /// Set default Directus account email
        #[arg(long)]
        cms_email: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["erdb", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                entities,
                game_version,
                minimize,
                ..
            } => {
                assert!(entities.is_empty());
                assert_eq!(game_version, "latest");
                assert!(!minimize);
            }
            _ => panic!("expected generate"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_generate_entities() {
        let cli = Cli::try_parse_from([
            "erdb",
            "-v",
            "g",
            "ashes-of-war",
            "tools",
            "--version",
            "1.10",
            "--minimize",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                entities,
                game_version,
                minimize,
                ..
            } => {
                assert_eq!(entities, vec![EntityKind::AshesOfWar, EntityKind::Tools]);
                assert_eq!(game_version, "1.10");
                assert!(minimize);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_entity() {
        assert!(Cli::try_parse_from(["erdb", "generate", "spirit-ashes"]).is_err());
    }

    #[test]
    fn test_parse_validate() {
        let cli =
            Cli::try_parse_from(["erdb", "validate", "correction-graph", "graphs.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Validate {
                command: ValidateCommand::CorrectionGraph { .. }
            }
        ));
    }
}
