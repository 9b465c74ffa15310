//! Patchlag - Windows patch drift measurement
//!
//! Scrapes the vendor's update-history page for the running feature release,
//! matches the installed OS build against the published cumulative updates,
//! and reports the day distance to the latest one as a single JSON object.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod delta;
mod domain;
mod environment;
mod error;
mod fetch;
mod linkparse;
mod resolver;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(cli.verbose, args),
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
