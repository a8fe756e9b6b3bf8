//! microblog - microposts for Jekyll sites
//!
//! Configures a microblog collection in a site's `_config.yml` and writes
//! short, timestamp-named posts with YAML front matter into it.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod logging;
mod post;
mod site;
mod ui;

use cli::{Cli, Commands};
use error::MicroblogError;

/// Print an error the way the site generator reports failures
fn report(err: &MicroblogError) {
    match err.help() {
        Some(help) => ui::error(&err.to_string(), &help.to_string()),
        None => ui::error("Error:", &err.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(cli.source, args),
        Commands::Log(args) => commands::log::run(cli.source, args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
