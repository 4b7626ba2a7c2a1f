//! Workbook-directory data source.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use super::{parse_cell, records_path, scalar_to_string, settings_path, DataSource};
use crate::error::{NewsgenError, Result};
use crate::record::{Record, Settings};

/// Raw settings sheet as stored in `general.json`. Values stay scalars here;
/// coercion to substitution strings happens in [`DataSource::settings`].
/// Absent keys deserialize as null and surface as missing fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneralSheet {
    logo: Value,
    banner: Value,
    date: Value,
    phone: Value,
    email: Value,
}

/// Reads the settings sheet from `general.json` and the items sheet from
/// `items.csv` inside one workbook directory.
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    dir: PathBuf,
}

impl WorkbookSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn required_setting(value: &Value, key: &str) -> Result<String> {
        scalar_to_string(value).ok_or_else(|| NewsgenError::missing_field(key))
    }
}

impl DataSource for WorkbookSource {
    fn settings(&self) -> Result<Settings> {
        let path = settings_path(&self.dir);
        let raw = fs::read_to_string(&path).map_err(|e| super::source_unavailable(&path, &e))?;
        let sheet: GeneralSheet = serde_json::from_str(&raw)?;

        Ok(Settings {
            logo: Self::required_setting(&sheet.logo, "logo")?,
            banner: Self::required_setting(&sheet.banner, "banner")?,
            // blank date means "generate from the clock"
            date: scalar_to_string(&sheet.date),
            phone: Self::required_setting(&sheet.phone, "phone")?,
            email: Self::required_setting(&sheet.email, "email")?,
        })
    }

    fn records(&self) -> Result<Vec<Record>> {
        let path = records_path(&self.dir);
        let mut reader = csv::Reader::from_path(&path).map_err(|e| {
            if e.is_io_error() {
                NewsgenError::SourceUnavailable {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            } else {
                NewsgenError::Csv(e)
            }
        })?;

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(NewsgenError::MissingSheet(path.display().to_string()));
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = Record::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                if let Some(value) = parse_cell(cell) {
                    record.set(header, value);
                }
            }
            records.push(record);
        }
        tracing::debug!(count = records.len(), path = %path.display(), "loaded records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use std::io::Write;

    fn workbook(general: &str, items: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("general.json"), general).unwrap();
        let mut f = fs::File::create(dir.path().join("items.csv")).unwrap();
        f.write_all(items.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn test_settings_with_blank_date() {
        let dir = workbook(
            r#"{"logo": "logo.png", "banner": "banner.png", "date": "", "phone": 555, "email": "a@b.com"}"#,
            "ID\n",
        );
        let source = WorkbookSource::new(dir.path());
        let settings = source.settings().unwrap();
        assert_eq!(settings.date, None);
        assert_eq!(settings.phone, "555");
    }

    #[test]
    fn test_absent_date_key_means_generated_date() {
        let dir = workbook(
            r#"{"logo": "l", "banner": "b", "phone": "p", "email": "e"}"#,
            "ID\n",
        );
        let settings = WorkbookSource::new(dir.path()).settings().unwrap();
        assert_eq!(settings.date, None);
    }

    #[test]
    fn test_headerless_items_sheet_is_missing_sheet() {
        let dir = workbook(
            r#"{"logo": "l", "banner": "b", "phone": "p", "email": "e"}"#,
            "",
        );
        let err = WorkbookSource::new(dir.path()).records().unwrap_err();
        assert!(matches!(err, NewsgenError::MissingSheet(_)));
    }

    #[test]
    fn test_missing_settings_key_fails() {
        let dir = workbook(r#"{"logo": "logo.png"}"#, "ID\n");
        let err = WorkbookSource::new(dir.path()).settings().unwrap_err();
        assert!(matches!(err, NewsgenError::MissingField { .. }));
    }

    #[test]
    fn test_missing_workbook_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = WorkbookSource::new(dir.path());
        assert!(matches!(
            source.settings().unwrap_err(),
            NewsgenError::SourceUnavailable { .. }
        ));
        assert!(matches!(
            source.records().unwrap_err(),
            NewsgenError::SourceUnavailable { .. }
        ));
    }

    #[test]
    fn test_records_parse_cells_and_skip_blanks() {
        let dir = workbook(
            r#"{"logo": "l", "banner": "b", "phone": "p", "email": "e"}"#,
            "ID,Brand,Ativo\n1,Opel,1\n2,,0\n",
        );
        let records = WorkbookSource::new(dir.path()).records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("ID"), Some(&FieldValue::Number(1.0)));
        assert_eq!(records[0].get("Brand"), Some(&FieldValue::Text("Opel".into())));
        assert!(!records[1].has("Brand"));
    }
}
