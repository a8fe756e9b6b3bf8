use clap::Parser;

/// Arguments for the microblog:setup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Configure interactively:\n    microblog microblog:setup\n\n\
                  Configure from a script:\n    echo notes | microblog microblog:setup")]
pub struct SetupArgs {}
