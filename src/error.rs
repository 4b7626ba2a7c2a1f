//! Error types for newsletter generation.
//!
//! Every failure is fatal for the run: the pipeline never skips a bad record or
//! renders a blank field, so all variants propagate to the top-level command.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NewsgenError>;

/// Errors produced by the newsletter pipeline
#[derive(Debug, Error)]
pub enum NewsgenError {
    /// The settings/records source could not be located or opened
    #[error("data source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// An expected sheet (settings or records set) is absent from the source
    #[error("missing sheet in data source: {0}")]
    MissingSheet(String),

    /// An expected settings key or record field is absent
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A value expected to be numeric could not be coerced
    #[error("field {field} is not numeric: {value:?}")]
    TypeConversion { field: String, value: String },

    /// Filtering left zero eligible records; a highlight is mandatory
    #[error("no active records after filtering; nothing to render")]
    NoActiveRecords,

    /// A required template resource could not be read
    #[error("template unavailable: {path}: {reason}")]
    TemplateUnavailable { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl NewsgenError {
    /// Shorthand for a missing-field failure
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }
}
