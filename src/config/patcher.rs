//! Line-based patching of `_config.yml`
//!
//! The configuration file is held twice: as raw lines, which are edited and
//! written back, and as a parsed YAML value, which is only consulted to decide
//! whether the collection is already declared. Re-serializing the parsed value
//! would drop comments and reorder keys, so output is always produced from the
//! raw lines.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use super::scalar_text;
use crate::common::fs;
use crate::error::Result;

const COLLECTIONS_KEY: &str = "collections:";
const MICROBLOG_KEY: &str = "microblog:";
const COLLECTION_KEY: &str = "collection:";

/// Add (or update) the microblog collection in the configuration file at `path`.
///
/// A missing file is treated as empty and created. Running this twice with the
/// same name leaves the file unchanged the second time.
pub fn ensure_collection_configured(path: &Path, collection: &str) -> Result<()> {
    let text = fs::read_optional(path)?.unwrap_or_default();
    let mut document = ConfigDocument::parse(&text);
    document.configure_collection(collection);
    fs::write_string(path, &document.render())?;
    debug!(path = %path.display(), collection, "wrote site configuration");
    Ok(())
}

/// Raw lines of a configuration file plus an advisory parsed view
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    /// Lines including their terminators
    lines: Vec<String>,
    parsed: Value,
}

/// Replace `remove` lines starting at `start` with `insert`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Splice {
    start: usize,
    remove: usize,
    insert: Vec<String>,
}

impl ConfigDocument {
    /// Split `text` into lines and parse it; unparseable YAML yields an empty mapping
    pub fn parse(text: &str) -> Self {
        let lines = text.split_inclusive('\n').map(str::to_owned).collect();
        let parsed = match serde_yaml::from_str::<Value>(text) {
            Ok(value @ Value::Mapping(_)) => value,
            Ok(_) => Value::Mapping(serde_yaml::Mapping::new()),
            Err(e) => {
                debug!(error = %e, "config is not valid YAML, assuming nothing is configured");
                Value::Mapping(serde_yaml::Mapping::new())
            }
        };
        Self { lines, parsed }
    }

    /// Whether `collections.<name>` is declared with a non-null value.
    ///
    /// Keys are compared by their text, so `2024:` matches the name `2024`.
    pub fn has_collection(&self, name: &str) -> bool {
        self.parsed
            .get("collections")
            .and_then(Value::as_mapping)
            .and_then(|collections| {
                collections
                    .iter()
                    .find(|(key, _)| scalar_text(key).as_deref() == Some(name))
            })
            .is_some_and(|(_, value)| !matches!(value, Value::Null | Value::Bool(false)))
    }

    /// Edit the lines so the collection is declared and selected for microposts
    pub fn configure_collection(&mut self, name: &str) {
        let mut splices = Vec::new();
        let mut appended = Vec::new();

        if self.has_collection(name) {
            debug!(collection = name, "collection already declared");
        } else {
            match self.find_collections_header() {
                Some(index) => {
                    let mut insert = Vec::new();
                    if !self.lines[index].ends_with('\n') {
                        insert.push("\n".to_string());
                    }
                    insert.extend(collection_entry(name));
                    splices.push(Splice {
                        start: index + 1,
                        remove: 0,
                        insert,
                    });
                }
                None => {
                    appended.push("\n".to_string());
                    appended.push(format!("{COLLECTIONS_KEY}\n"));
                    appended.extend(collection_entry(name));
                }
            }
        }

        match self.microblog_splice(name) {
            Some(splice) => splices.extend(splice),
            None => {
                appended.push("\n".to_string());
                appended.push(format!("{MICROBLOG_KEY}\n"));
                appended.push(collection_setting(name));
            }
        }

        // Bottom-up so earlier indices stay valid
        splices.sort_by(|a, b| (b.start, b.remove).cmp(&(a.start, a.remove)));
        for splice in splices {
            let end = splice.start + splice.remove;
            self.lines.splice(splice.start..end, splice.insert);
        }
        self.lines.extend(appended);
    }

    /// Concatenate the lines back into file content
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    fn find_collections_header(&self) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.starts_with(COLLECTIONS_KEY))
    }

    /// Splices that rewrite an existing `microblog:` block, or `None` if there is none
    fn microblog_splice(&self, name: &str) -> Option<Vec<Splice>> {
        let header = self
            .lines
            .iter()
            .position(|line| line.trim().starts_with(MICROBLOG_KEY))?;
        let mut body = self.block_body(header);

        let child_indent = body
            .clone()
            .filter(|&i| !is_blank(&self.lines[i]) && !is_comment(&self.lines[i]))
            .map(|i| indent_of(&self.lines[i]))
            .min();
        let existing = body.find(|&i| {
            let line = &self.lines[i];
            Some(indent_of(line)) == child_indent && line.trim_start().starts_with(COLLECTION_KEY)
        });

        let header_line = format!("{MICROBLOG_KEY}\n");
        Some(match existing {
            Some(index) => vec![
                Splice {
                    start: header,
                    remove: 1,
                    insert: vec![header_line],
                },
                Splice {
                    start: index,
                    remove: 1,
                    insert: vec![collection_setting(name)],
                },
            ],
            None => vec![Splice {
                start: header,
                remove: 1,
                insert: vec![header_line, collection_setting(name)],
            }],
        })
    }

    /// Indices of the lines nested under `header`, without trailing blank lines
    fn block_body(&self, header: usize) -> std::ops::Range<usize> {
        let header_indent = indent_of(&self.lines[header]);
        let mut end = header + 1;
        while end < self.lines.len() {
            let line = &self.lines[end];
            if !is_blank(line) && indent_of(line) <= header_indent {
                break;
            }
            end += 1;
        }
        while end > header + 1 && is_blank(&self.lines[end - 1]) {
            end -= 1;
        }
        header + 1..end
    }
}

fn collection_entry(name: &str) -> Vec<String> {
    vec![format!("  {name}:\n"), "    output: true\n".to_string()]
}

fn collection_setting(name: &str) -> String {
    format!("  {COLLECTION_KEY} {name}\n")
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
