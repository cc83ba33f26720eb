//! Record sources: where the canonical dataset comes from.
//!
//! A source hands the controller a finite, ordered list of records with
//! unique ids. The controller treats the result as read-only for the rest
//! of the session.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use weatherdeck_types::WeatherRecord;

/// Supplies the canonical record list at startup.
pub trait RecordSource {
    /// Human-readable origin, for diagnostics ("bundled dataset",
    /// "JSON file /path/to/x.json", ...)
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Vec<WeatherRecord>>;
}

/// Reject a dataset whose ids are not unique.
///
/// Derived id-lists reference records by id, so a duplicate would make
/// resolution ambiguous. Failing at the boundary keeps every later
/// operation total.
pub fn validate_unique_ids(records: &[WeatherRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(Error::DuplicateRecordId(record.id));
        }
    }
    Ok(())
}

static BUNDLED_RECORDS: Lazy<Vec<WeatherRecord>> = Lazy::new(|| {
    serde_json::from_str(include_str!("bundled_records.json"))
        .expect("bundled dataset is valid JSON")
});

/// The demo dataset compiled into the binary. Used when no data file is
/// configured, so the dashboard works out of the box.
#[derive(Debug, Default)]
pub struct BundledSource;

impl RecordSource for BundledSource {
    fn describe(&self) -> String {
        "bundled dataset".to_string()
    }

    fn fetch(&self) -> Result<Vec<WeatherRecord>> {
        Ok(BUNDLED_RECORDS.clone())
    }
}

/// A dataset stored as a JSON array of records.
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }

    fn fetch(&self) -> Result<Vec<WeatherRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }
}

/// A dataset stored as headered CSV (`id,city,temperature_c,description`).
#[derive(Debug)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvFileSource {
    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }

    fn fetch(&self) -> Result<Vec<WeatherRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: WeatherRecord = row?;
            records.push(record);
        }
        Ok(records)
    }
}

/// Pick a source implementation from a dataset path's extension.
pub fn source_for_path(path: &Path) -> Result<Box<dyn RecordSource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => Ok(Box::new(JsonFileSource::new(path))),
        "csv" => Ok(Box::new(CsvFileSource::new(path))),
        other => Err(Error::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            format!(".{}", other)
        })),
    }
}
