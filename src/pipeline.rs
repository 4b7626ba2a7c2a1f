//! Record selection and ordering.
//!
//! Drops inactive records, stable-sorts the remainder by display priority, and
//! splits the result into the single highlight record plus the ordered content
//! records. Malformed records abort the run rather than rendering blank.

use crate::error::{NewsgenError, Result};
use crate::record::Record;

/// Column holding the active/inactive flag
pub const ACTIVE_FIELD: &str = "Ativo";

/// Column holding the numeric display priority
pub const PRIORITY_FIELD: &str = "Display_no";

/// Fields every rendered record must carry
pub const REQUIRED_FIELDS: &[&str] = &[
    "ID",
    "Brand",
    "Model",
    "year",
    "Km",
    "Address",
    "Link_to_folder",
    "Link_to_pic",
    "Comentarios",
];

/// The ordered working set: the highlight plus content records in priority order
#[derive(Debug, Clone)]
pub struct Selection {
    pub highlight: Record,
    pub content: Vec<Record>,
}

impl Selection {
    /// Split an ordered, non-empty record list into highlight and content
    pub fn from_ordered(mut ordered: Vec<Record>) -> Result<Self> {
        if ordered.is_empty() {
            return Err(NewsgenError::NoActiveRecords);
        }
        let content = ordered.split_off(1);
        let highlight = ordered.remove(0);
        Ok(Self { highlight, content })
    }
}

/// Filter inactive records and order the rest by ascending display priority.
///
/// The sort is stable: ties keep their original relative order. Positions in
/// the returned list are the records' new 0-based indices; index 0 is the
/// highlight, and index `i > 0` renders with content ordinal `i - 1`.
pub fn select_and_order(records: Vec<Record>) -> Result<Vec<Record>> {
    let total = records.len();
    let mut keyed: Vec<(f64, Record)> = Vec::with_capacity(total);
    for record in records {
        if !is_active(&record)? {
            continue;
        }
        for field in REQUIRED_FIELDS {
            if !record.has(field) {
                return Err(NewsgenError::missing_field(*field));
            }
        }
        let priority = record.numeric(PRIORITY_FIELD)?;
        keyed.push((priority, record));
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    if keyed.is_empty() {
        return Err(NewsgenError::NoActiveRecords);
    }
    tracing::debug!(active = keyed.len(), total, "ordered active records");
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// A record is inactive when its flag is numeric zero, the text "0", or empty;
/// any other non-empty value counts as active.
fn is_active(record: &Record) -> Result<bool> {
    use crate::record::FieldValue;
    let flag = record
        .get(ACTIVE_FIELD)
        .ok_or_else(|| NewsgenError::missing_field(ACTIVE_FIELD))?;
    Ok(match flag {
        FieldValue::Number(n) => *n != 0.0,
        FieldValue::Text(s) => !s.is_empty() && s != "0",
    })
}
