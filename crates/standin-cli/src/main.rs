//! Standin CLI: the `standin` command.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Token { command } => commands::token::run(command),

        Commands::Synth { count, json } => commands::synth::run(count, json),

        Commands::Demo { count, json } => commands::demo::run(count, json),
    }
}
