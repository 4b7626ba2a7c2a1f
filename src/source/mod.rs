//! Data source readers.
//!
//! The pipeline consumes two record sets: a flat key/value settings set and the
//! tabular items set. [`DataSource`] is the seam; [`WorkbookSource`] is the
//! shipped implementation, reading a workbook directory holding `general.json`
//! (settings) and `items.csv` (items, one row per record with a header row).

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{NewsgenError, Result};
use crate::record::{FieldValue, Record, Settings};

mod workbook;

pub use workbook::WorkbookSource;

/// Supplier of the settings set and the record set
pub trait DataSource {
    fn settings(&self) -> Result<Settings>;
    fn records(&self) -> Result<Vec<Record>>;
}

/// Coerce a scalar JSON settings value to its substitution string.
///
/// Numbers collapse whole values to integer strings the same way record fields
/// do (a phone cell stored as 555.0 must substitute as "555"). Null and empty
/// strings mean "absent".
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Some(FieldValue::Number(f).display_string()),
            None => Some(n.to_string()),
        },
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn source_unavailable(path: &Path, err: &std::io::Error) -> NewsgenError {
    NewsgenError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Parse one CSV cell into a field value. Cells that parse as a number are
/// numeric; everything else is literal text. Empty cells yield no field.
fn parse_cell(cell: &str) -> Option<FieldValue> {
    if cell.is_empty() {
        return None;
    }
    match cell.trim().parse::<f64>() {
        Ok(n) => Some(FieldValue::Number(n)),
        Err(_) => Some(FieldValue::Text(cell.to_string())),
    }
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join("general.json")
}

fn records_path(dir: &Path) -> PathBuf {
    dir.join("items.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_numbers_collapse_like_record_fields() {
        assert_eq!(scalar_to_string(&json!(555.0)), Some("555".to_string()));
        assert_eq!(scalar_to_string(&json!(1.5)), Some("1.5".to_string()));
    }

    #[test]
    fn test_blank_and_null_are_absent() {
        assert_eq!(scalar_to_string(&json!("")), None);
        assert_eq!(scalar_to_string(&Value::Null), None);
    }

    #[test]
    fn test_cell_parsing() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("12"), Some(FieldValue::Number(12.0)));
        assert_eq!(
            parse_cell("https://x/open?id=1"),
            Some(FieldValue::Text("https://x/open?id=1".to_string()))
        );
    }
}
