//! Dataset fixtures for integration tests.
//!
//! Provides a small, stable record set and helpers that place it on disk
//! in the formats the CLI accepts, inside an isolated temp directory.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use weatherdeck_types::WeatherRecord;

/// The record set used across tests.
///
/// Deliberately includes the New York / Paris pair with their well-known
/// temperatures, which several assertions rely on.
pub fn sample_records() -> Vec<WeatherRecord> {
    vec![
        WeatherRecord::new(1, "New York", 20.0, "Partly cloudy"),
        WeatherRecord::new(2, "Paris", 15.0, "Light rain"),
        WeatherRecord::new(3, "London", 12.5, "Overcast"),
        WeatherRecord::new(4, "Tokyo", 26.0, "Humid, clear skies"),
    ]
}

/// Isolated temp directory that can materialize datasets in the formats
/// the CLI understands.
pub struct DatasetFixture {
    temp_dir: TempDir,
}

impl Default for DatasetFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write records as a JSON dataset and return its path.
    pub fn json_dataset(&self, name: &str, records: &[WeatherRecord]) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(records)?)?;
        Ok(path)
    }

    /// Write records as a headered CSV dataset and return its path.
    pub fn csv_dataset(&self, name: &str, records: &[WeatherRecord]) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        let mut writer = csv::Writer::from_path(&path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(path)
    }

    /// Write arbitrary file content (for malformed-input tests).
    pub fn raw_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
