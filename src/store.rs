//! Template store.
//!
//! Loads the four newsletter templates from a directory as read-only text. A
//! template that cannot be read is fatal before any rendering starts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NewsgenError, Result};

/// Template file names inside the templates directory
pub const HEADER_TEMPLATE: &str = "header.html";
pub const HIGHLIGHT_TEMPLATE: &str = "highlights.html";
pub const CONTENT_TEMPLATE: &str = "content.html";
pub const DOCUMENT_TEMPLATE: &str = "template.html";

/// Raw text of the four templates for one run
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub header: String,
    pub highlight: String,
    pub content: String,
    pub document: String,
}

/// Loads templates from a directory
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read all four templates, failing on the first unreadable one
    pub fn load(&self) -> Result<TemplateSet> {
        let set = TemplateSet {
            header: self.read(HEADER_TEMPLATE)?,
            highlight: self.read(HIGHLIGHT_TEMPLATE)?,
            content: self.read(CONTENT_TEMPLATE)?,
            document: self.read(DOCUMENT_TEMPLATE)?,
        };
        tracing::debug!(dir = %self.dir.display(), "templates loaded");
        Ok(set)
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|e| template_unavailable(&path, &e))
    }
}

fn template_unavailable(path: &Path, err: &std::io::Error) -> NewsgenError {
    NewsgenError::TemplateUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
