//! Validate subcommands

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ValidateCommand {
    /// Validate a correction graph table (id -> 151 ratios)
    CorrectionGraph {
        /// Path to the JSON table
        input: PathBuf,
    },

    /// Validate a reinforcement table (id -> up to 26 levels)
    Reinforcement {
        /// Path to the JSON table
        input: PathBuf,
    },
}
