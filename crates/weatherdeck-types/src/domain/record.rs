use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a weather record within a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single weather observation for a city.
///
/// Immutable once loaded: the dataset is read-only for the lifetime of a
/// session, and per-user state (favorites, search hits) is tracked by id
/// membership outside the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Unique, stable identifier within the dataset
    pub id: RecordId,

    /// City name the observation belongs to
    pub city: String,

    /// Temperature in Celsius. Celsius is the canonical stored unit;
    /// Fahrenheit is derived at display time.
    pub temperature_c: f64,

    /// Free-text conditions summary (e.g. "Partly cloudy")
    pub description: String,
}

impl WeatherRecord {
    pub fn new(
        id: impl Into<RecordId>,
        city: impl Into<String>,
        temperature_c: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            city: city.into(),
            temperature_c,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_serializes_as_bare_integer() {
        let record = WeatherRecord::new(7, "Lisbon", 24.5, "Sunny");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":7"), "unexpected json: {}", json);

        let back: WeatherRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::new(42).to_string(), "42");
    }
}
