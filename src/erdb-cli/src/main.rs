mod cli;
mod commands;
mod config;
mod directus;
mod dispatch;
mod entity;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "erdb=debug,erdb_cli=debug"
    } else {
        "erdb=info,erdb_cli=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    dispatch::dispatch(cli.command)
}
