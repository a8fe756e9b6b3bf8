//! Site root and the paths microblog touches inside it
//!
//! ```text
//! <site>/
//! ├── _config.yml      # site configuration
//! └── _<collection>/   # one directory per collection
//!     └── 2024-01-02-15-04-05.md
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::fs;
use crate::config::{CONFIG_FILE, SiteConfig};
use crate::error::Result;

/// Prefix of collection directories
pub const COLLECTION_DIR_PREFIX: char = '_';

/// A site directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Root directory of the site (where `_config.yml` lives)
    pub root: PathBuf,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Site rooted at `source`, or the current directory
    pub fn from_source(source: Option<PathBuf>) -> Result<Self> {
        let root = match source {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        Ok(Self::new(root))
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Site-relative directory name of a collection, e.g. `_notes`
    pub fn collection_dir_name(collection: &str) -> String {
        format!("{COLLECTION_DIR_PREFIX}{collection}")
    }

    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(Self::collection_dir_name(collection))
    }

    /// Create the collection directory if it does not exist yet
    pub fn ensure_collection_dir(&self, collection: &str) -> Result<PathBuf> {
        let dir = self.collection_dir(collection);
        fs::ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Load `_config.yml`; a missing file is an empty configuration
    pub fn load_config(&self) -> Result<SiteConfig> {
        let path = self.config_path();
        let Some(text) = fs::read_optional(&path)? else {
            debug!(path = %path.display(), "no site configuration found");
            return Ok(SiteConfig::default());
        };
        SiteConfig::from_yaml(&path.display().to_string(), &text)
    }

    /// Strip the site root from `path` for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
