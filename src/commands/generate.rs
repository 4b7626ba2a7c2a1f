//! Generate command.
//!
//! Implements `newsgen generate`: one full newsletter run against a workbook
//! directory, a templates directory, and a working directory.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use console::style;

use crate::run::generate;
use crate::sink::Sink;
use crate::source::WorkbookSource;
use crate::store::TemplateStore;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Workbook directory holding general.json and items.csv
    pub source: PathBuf,
    /// Directory holding the four HTML templates
    pub templates: PathBuf,
    /// Working directory for outputs and the archive
    pub workdir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("data"),
            templates: PathBuf::from("templates"),
            workdir: PathBuf::from("."),
        }
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    println!("{} Generating newsletter...", style("→").cyan());

    let source = WorkbookSource::new(&options.source);
    let store = TemplateStore::new(&options.templates);
    let sink = Sink::new(&options.workdir);

    let summary = generate(&source, &store, &sink, Local::now())?;

    println!(
        "{} Newsletter written to {}",
        style("✓").green(),
        summary.outputs[0].display()
    );
    println!("  Highlight: ID {}", summary.highlight_id);
    println!("  Content entries: {}", summary.content_count);

    Ok(())
}
