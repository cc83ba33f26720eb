use std::fmt;
use weatherdeck_types::RecordId;

/// Result type for weatherdeck-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a dataset.
///
/// View-state mutations themselves are total and never error; everything
/// here belongs to the load path.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON dataset could not be parsed
    Json(serde_json::Error),

    /// CSV dataset could not be parsed
    Csv(csv::Error),

    /// Dataset file extension is neither .json nor .csv
    UnsupportedFormat(String),

    /// A source returned two records with the same id
    DuplicateRecordId(RecordId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON dataset error: {}", err),
            Error::Csv(err) => write!(f, "CSV dataset error: {}", err),
            Error::UnsupportedFormat(ext) => {
                write!(f, "Unsupported dataset format: {} (expected .json or .csv)", ext)
            }
            Error::DuplicateRecordId(id) => {
                write!(f, "Dataset contains duplicate record id: {}", id)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::UnsupportedFormat(_) | Error::DuplicateRecordId(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
