//! Command dispatch functions
//!
//! Breaks up the main match statement into focused dispatch functions.

use anyhow::Result;

use crate::cli::*;
use crate::commands;
use crate::commands::configure::ConfigUpdate;
use crate::commands::import::CmsLogin;

/// Dispatch a parsed top-level command
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            entities,
            game_version,
            data_dir,
            schema_dir,
            output_dir,
            minimize,
        } => commands::generate::run(
            entities,
            &game_version,
            data_dir,
            schema_dir,
            output_dir,
            minimize,
        ),

        Commands::Validate { command } => dispatch_validate(command),

        Commands::List => commands::list::run(),

        Commands::Import {
            entities,
            game_version,
            data_dir,
            schema_dir,
            endpoint,
            email,
            password,
            folder,
        } => commands::import::run(
            entities,
            &game_version,
            data_dir,
            schema_dir,
            CmsLogin {
                endpoint,
                email,
                password,
            },
            &folder,
        ),

        Commands::Configure {
            data_dir,
            schema_dir,
            output_dir,
            cms_endpoint,
            cms_email,
            show,
        } => commands::configure::handle(
            ConfigUpdate {
                data_dir,
                schema_dir,
                output_dir,
                cms_endpoint,
                cms_email,
            },
            show,
        ),
    }
}

/// Dispatch validate subcommands
pub fn dispatch_validate(command: ValidateCommand) -> Result<()> {
    match command {
        ValidateCommand::CorrectionGraph { input } => commands::validate::correction_graph(&input),
        ValidateCommand::Reinforcement { input } => commands::validate::reinforcement(&input),
    }
}
