//! CLI argument definitions for erdb
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod validate;

pub use core::{Cli, Commands};
pub use validate::ValidateCommand;
