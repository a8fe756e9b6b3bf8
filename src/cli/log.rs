use clap::Parser;

/// Arguments for the log command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Post a micropost:\n    microblog log Hello world\n\n\
                  Quote text with shell characters:\n    microblog log \"Ship it!\"")]
pub struct LogArgs {
    /// Post text; words are joined with single spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, value_name = "TEXT")]
    pub text: Vec<String>,
}

impl LogArgs {
    pub fn body(&self) -> String {
        self.text.join(" ")
    }
}
