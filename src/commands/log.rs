//! log command implementation

use std::path::PathBuf;

use crate::cli::LogArgs;
use crate::error::{MicroblogError, Result};
use crate::post;
use crate::site::Site;
use crate::ui;

pub fn run(source: Option<PathBuf>, args: LogArgs) -> Result<()> {
    let site = Site::from_source(source)?;
    let path = log(&site, &args.body())?;
    ui::info(
        "Created micropost:",
        &site.relative(&path).display().to_string(),
    );
    Ok(())
}

/// Write `body` into the configured collection
pub fn log(site: &Site, body: &str) -> Result<PathBuf> {
    let config = site.load_config()?;
    let collection = config
        .microblog_collection()
        .ok_or(MicroblogError::NotConfigured)?;
    post::create_post(site, &collection, body)
}
