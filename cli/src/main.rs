mod changelog;
mod cli;
mod error;
mod port;
mod progress;
mod structs;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose());

    let result = match cli.command {
        Commands::Changelog {
            style,
            release_version,
            config,
            input,
            since,
            verbose,
        } => changelog::execute(
            style.map(Into::into),
            release_version,
            config,
            input,
            since,
            verbose,
        ),
        Commands::Port {
            release_version,
            sha512,
            out,
            probe,
            triplet,
            verbose,
        } => port::execute(release_version, sha512, out, probe, triplet, verbose),
        Commands::Struct {
            style,
            sources,
            header,
            out_header,
            out_source,
            force,
            verbose,
        } => structs::execute(structs::StructOptions {
            style: style.into(),
            sources,
            header,
            out_header,
            out_source,
            force,
            verbose,
        }),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
