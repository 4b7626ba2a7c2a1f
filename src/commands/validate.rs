//! Validate command.
//!
//! Implements `newsgen validate`: loads the source and templates, runs the
//! filter/sort stage and projects every selected record, reporting what a
//! generate run would render without writing any output.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::pipeline::{select_and_order, Selection};
use crate::project::{content_context, highlight_context, specs_context};
use crate::source::{DataSource, WorkbookSource};
use crate::store::TemplateStore;

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Workbook directory holding general.json and items.csv
    pub source: PathBuf,
    /// Directory holding the four HTML templates
    pub templates: PathBuf,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("data"),
            templates: PathBuf::from("templates"),
        }
    }
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    println!("{} Validating newsletter inputs...", style("→").cyan());

    let source = WorkbookSource::new(&options.source);
    source.settings()?;
    TemplateStore::new(&options.templates).load()?;

    let ordered = select_and_order(source.records()?)?;
    let total = ordered.len();
    let selection = Selection::from_ordered(ordered)?;

    // Project every record so type errors surface here, not mid-generate
    highlight_context(&selection.highlight)?;
    specs_context(&selection.highlight)?;
    for (ordinal, record) in selection.content.iter().enumerate() {
        content_context(record, ordinal)?;
        specs_context(record)?;
    }

    println!("{} Inputs valid", style("✓").green());
    println!("  Active records: {}", total);
    println!("  Highlight: ID {}", selection.highlight.integer("ID")?);
    println!("  Content entries: {}", selection.content.len());

    Ok(())
}
