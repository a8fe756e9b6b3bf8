//! Micropost files
//!
//! A micropost is written once to `_<collection>/<timestamp>.md`:
//!
//! ```text
//! ---
//! date: 2024-01-02 15:04:05 +0000
//! ---
//!
//! Hello world
//! ```

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use tracing::debug;

use crate::common::fs;
use crate::error::Result;
use crate::site::Site;

/// Filename timestamp, second resolution
const FILENAME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Front matter `date` value, with UTC offset
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

const FRONT_MATTER_DELIMITER: &str = "---";

/// A post body stamped with its creation time
#[derive(Debug, Clone)]
pub struct Micropost<'a> {
    pub created: DateTime<FixedOffset>,
    pub body: &'a str,
}

impl<'a> Micropost<'a> {
    /// Stamp `body` with the current local time
    pub fn now(body: &'a str) -> Self {
        Self::at(Local::now().fixed_offset(), body)
    }

    pub fn at(created: DateTime<FixedOffset>, body: &'a str) -> Self {
        Self { created, body }
    }

    /// `<timestamp>.md`
    pub fn file_name(&self) -> String {
        format!("{}.md", self.created.format(FILENAME_FORMAT))
    }

    /// Front matter header, blank line, body
    pub fn render(&self) -> String {
        let mut out = format!(
            "{FRONT_MATTER_DELIMITER}\ndate: {}\n{FRONT_MATTER_DELIMITER}\n\n{}",
            self.created.format(DATE_FORMAT),
            self.body
        );
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Write a new micropost with the current time into `collection`.
///
/// Returns the path of the written file. A post created within the same second
/// overwrites the previous one.
pub fn create_post(site: &Site, collection: &str, body: &str) -> Result<PathBuf> {
    write_post(site, collection, &Micropost::now(body))
}

pub fn write_post(site: &Site, collection: &str, post: &Micropost<'_>) -> Result<PathBuf> {
    let dir = site.ensure_collection_dir(collection)?;
    let path = dir.join(post.file_name());
    fs::write_string(&path, &post.render())?;
    debug!(path = %path.display(), "wrote micropost");
    Ok(path)
}
