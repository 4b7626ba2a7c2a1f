//! Output sink: fragment files, final document, and archival bookkeeping.
//!
//! The working directory is exclusively owned for the duration of one run; two
//! concurrent runs against the same directory are unsupported. Working files
//! keep fixed names while the run is in flight and are promoted to timestamped
//! names only after the document has been composed successfully, so a failed
//! run never leaves half-finished outputs under final names.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

/// Working file names while a run is in flight
pub const HEADER_FILE: &str = "newsletter_header.html";
pub const HIGHLIGHT_FILE: &str = "newsletter_highlight.html";
pub const CONTENT_FILE: &str = "newsletter_content.html";
pub const DOCUMENT_FILE: &str = "newsletter.html";

/// Archive subdirectory for previous runs' outputs
pub const ARCHIVE_DIR: &str = "old";

/// Timestamp suffix format for promoted files: day month year hour minute second
const STAMP_FORMAT: &str = "%d%m%Y%H%M%S";

/// Writes fragments and the final document into one working directory
#[derive(Debug, Clone)]
pub struct Sink {
    workdir: PathBuf,
}

impl Sink {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Move any previous run's `newsletter*` outputs into the archive
    /// subdirectory, creating it if needed.
    pub fn archive_previous(&self) -> Result<()> {
        let archive = self.workdir.join(ARCHIVE_DIR);
        if !archive.exists() {
            fs::create_dir_all(&archive)?;
        }
        for entry in fs::read_dir(&self.workdir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if name.to_string_lossy().starts_with("newsletter") {
                fs::rename(entry.path(), archive.join(&name))?;
                tracing::debug!(file = %name.to_string_lossy(), "archived previous output");
            }
        }
        Ok(())
    }

    /// Write the header fragment, replacing any stale working file
    pub fn write_header(&self, fragment: &str) -> Result<()> {
        fs::write(self.workdir.join(HEADER_FILE), fragment)?;
        Ok(())
    }

    /// Write the highlight fragment, replacing any stale working file
    pub fn write_highlight(&self, fragment: &str) -> Result<()> {
        fs::write(self.workdir.join(HIGHLIGHT_FILE), fragment)?;
        Ok(())
    }

    /// Append one content fragment after all previously written ones. The
    /// content working file accumulates across calls within a run.
    pub fn append_content(&self, fragment: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.workdir.join(CONTENT_FILE))?;
        file.write_all(fragment.as_bytes())?;
        Ok(())
    }

    /// Write the composed document
    pub fn write_document(&self, document: &str) -> Result<()> {
        fs::write(self.workdir.join(DOCUMENT_FILE), document)?;
        Ok(())
    }

    /// Promote the run's outputs to their timestamped final names.
    ///
    /// The clock instant is passed in by the caller so reruns and tests stay
    /// deterministic. Returns the promoted paths, document first.
    pub fn promote(&self, now: DateTime<Local>) -> Result<Vec<PathBuf>> {
        let stamp = now.format(STAMP_FORMAT).to_string();
        let mut promoted = Vec::with_capacity(4);
        for working in [DOCUMENT_FILE, CONTENT_FILE, HEADER_FILE, HIGHLIGHT_FILE] {
            let stem = working.trim_end_matches(".html");
            let stamped = format!("{}_{}.html", stem, stamp);
            let from = self.workdir.join(working);
            let to = self.workdir.join(&stamped);
            fs::rename(&from, &to)?;
            promoted.push(to);
        }
        Ok(promoted)
    }
}
