//! Record and settings types.
//!
//! A [`Record`] is one row of the tabular source: named fields holding scalar
//! cell values. Records are immutable after load; the pipeline only ever builds
//! filtered and reordered views of them.

use std::collections::BTreeMap;

use crate::error::{NewsgenError, Result};

/// A scalar cell value from the data source.
///
/// The source reader exposes cells as already-parsed primitives. Blank cells
/// never appear here; they are absent keys on the record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Render the value for substitution.
    ///
    /// Whole-valued numerics render as their integer decimal string: a cell
    /// holding 2010.0 substitutes as "2010", never "2010.0". Text passes
    /// through literally.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// One input row with named fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. Used by source readers while building the record.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Substitution string for a required field
    pub fn display(&self, name: &str) -> Result<String> {
        self.require(name).map(FieldValue::display_string)
    }

    /// Numeric value of a required field.
    ///
    /// Text cells that parse as a number are accepted; anything else is a
    /// [`NewsgenError::TypeConversion`].
    pub fn numeric(&self, name: &str) -> Result<f64> {
        match self.require(name)? {
            FieldValue::Number(n) => Ok(*n),
            FieldValue::Text(s) => {
                s.trim().parse::<f64>().map_err(|_| NewsgenError::TypeConversion {
                    field: name.to_string(),
                    value: s.clone(),
                })
            }
        }
    }

    /// Integer value of a required numeric field (identifiers, priorities)
    pub fn integer(&self, name: &str) -> Result<i64> {
        Ok(self.numeric(name)? as i64)
    }

    fn require(&self, name: &str) -> Result<&FieldValue> {
        self.fields
            .get(name)
            .ok_or_else(|| NewsgenError::missing_field(name))
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

/// The flat key/value settings set from the source
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Logo reference for the header
    pub logo: String,
    /// Banner image reference for the header
    pub banner: String,
    /// Optional display date; blank means "generate from the clock"
    pub date: Option<String>,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numeric_renders_as_integer_string() {
        assert_eq!(FieldValue::Number(2010.0).display_string(), "2010");
        assert_eq!(FieldValue::Number(0.0).display_string(), "0");
        assert_eq!(FieldValue::Number(-3.0).display_string(), "-3");
    }

    #[test]
    fn test_fractional_numeric_keeps_fraction() {
        assert_eq!(FieldValue::Number(1.5).display_string(), "1.5");
    }

    #[test]
    fn test_text_passes_through_literally() {
        assert_eq!(FieldValue::Text("2010.0".into()).display_string(), "2010.0");
    }

    #[test]
    fn test_missing_field_errors() {
        let record = Record::new();
        let err = record.display("Brand").unwrap_err();
        assert!(matches!(err, NewsgenError::MissingField { .. }));
    }

    #[test]
    fn test_numeric_from_text_cell() {
        let mut record = Record::new();
        record.set("Display_no", "7");
        assert_eq!(record.numeric("Display_no").unwrap(), 7.0);
    }

    #[test]
    fn test_non_numeric_text_is_type_conversion_error() {
        let mut record = Record::new();
        record.set("Display_no", "first");
        let err = record.numeric("Display_no").unwrap_err();
        assert!(matches!(err, NewsgenError::TypeConversion { .. }));
    }
}
