//! CLI definitions using clap derive API
//!
//! Each command's argument type lives in its own submodule.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod log;
pub mod setup;

pub use log::LogArgs;
pub use setup::SetupArgs;

/// microblog - microposts for Jekyll sites
#[derive(Parser, Debug)]
#[command(
    name = "microblog",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Microblog collections and timestamped microposts for Jekyll sites",
    long_about = "Configures a microblog collection in a Jekyll site's _config.yml \
                  and writes short, timestamp-named posts into it.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  microblog microblog:setup\n    \
                  microblog log Hello world\n    \
                  microblog --source ~/sites/blog log Shipped it"
)]
pub struct Cli {
    /// Site directory (defaults to current directory)
    #[arg(long, short = 's', global = true, env = "MICROBLOG_SOURCE")]
    pub source: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up microblog collection
    #[command(name = "microblog:setup")]
    Setup(SetupArgs),

    /// Create a new micropost
    Log(LogArgs),
}
