//! microblog:setup command implementation

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use inquire::Text;
use tracing::debug;

use crate::cli::SetupArgs;
use crate::config::{self, DEFAULT_COLLECTION};
use crate::error::{MicroblogError, Result};
use crate::site::Site;
use crate::ui;

const PROMPT: &str = "Collection name (default: microposts): ";

pub fn run(source: Option<PathBuf>, _args: SetupArgs) -> Result<()> {
    let site = Site::from_source(source)?;
    let input = prompt_collection_name()?;
    let collection = resolve_collection_name(&input);

    configure(&site, &collection)?;

    ui::info(
        "Microblog setup complete:",
        &format!("Collection '{collection}' configured"),
    );
    Ok(())
}

/// Declare `collection` in the site configuration and create its directory
pub fn configure(site: &Site, collection: &str) -> Result<()> {
    config::ensure_collection_configured(&site.config_path(), collection)?;
    let dir = site.ensure_collection_dir(collection)?;
    debug!(dir = %dir.display(), "collection directory ready");
    Ok(())
}

/// Trimmed input, or the default collection when nothing was entered
pub fn resolve_collection_name(input: &str) -> String {
    match input.trim() {
        "" => DEFAULT_COLLECTION.to_string(),
        name => name.to_string(),
    }
}

fn prompt_collection_name() -> Result<String> {
    if std::io::stdin().is_terminal() {
        return Ok(Text::new("Collection name")
            .with_placeholder(DEFAULT_COLLECTION)
            .with_help_message("Press Enter to use the default")
            .prompt()?);
    }

    print!("{PROMPT}");
    std::io::stdout().flush()?;
    read_line(std::io::stdin().lock())
}

/// Read one line; end of input counts as an empty answer
fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| MicroblogError::PromptFailed {
            message: e.to_string(),
        })?;
    Ok(line)
}
