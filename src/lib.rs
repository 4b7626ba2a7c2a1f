#![forbid(unsafe_code)]

//! # newsgen
//!
//! Tabular-data newsletter generator. Rows describing items (metadata, image
//! and folder links, an active flag, a display priority) are filtered, sorted,
//! projected into flat substitution contexts, and rendered through a set of
//! HTML template fragments into one composed newsletter document.
//!
//! The renderer performs literal token substitution only: tokens are matched as
//! plain substrings, with no conditionals, loops, or escaping.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use newsgen::{Sink, TemplateStore, WorkbookSource};
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = WorkbookSource::new("data");
//!     let store = TemplateStore::new("templates");
//!     let sink = Sink::new(".");
//!     let summary = newsgen::run::generate(&source, &store, &sink, Local::now())?;
//!     println!("highlight: ID {}", summary.highlight_id);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod compose;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod record;
pub mod render;
pub mod run;
pub mod sink;
pub mod source;
pub mod store;

// Re-exports
pub use compose::{compose, CONTENT_MARKER, HEADER_MARKER, HIGHLIGHT_MARKER};
pub use error::{NewsgenError, Result};
pub use pipeline::{select_and_order, Selection};
pub use project::{content_context, highlight_context, specs_context, Context};
pub use record::{FieldValue, Record, Settings};
pub use render::{render, FragmentBuffer};
pub use run::{generate, RunSummary};
pub use sink::Sink;
pub use source::{DataSource, WorkbookSource};
pub use store::{TemplateSet, TemplateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
