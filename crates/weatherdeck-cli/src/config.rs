use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use weatherdeck_types::TemperatureUnit;

/// Persistent user configuration.
///
/// Only ambient preferences live here; view state (favorites, search) is
/// session-only and never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display unit used when `--unit` is not given
    #[serde(default)]
    pub default_unit: TemperatureUnit,

    /// Dataset to load instead of the bundled one
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration, treating a missing file as defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("could not determine the platform config directory"))?;
        Ok(config_dir.join("weatherdeck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.default_unit, TemperatureUnit::Celsius);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            default_unit: TemperatureUnit::Fahrenheit,
            data_file: Some(PathBuf::from("/tmp/cities.json")),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(loaded.data_file.as_deref(), Some(Path::new("/tmp/cities.json")));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_unit = \"fahrenheit\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_unit, TemperatureUnit::Fahrenheit);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_unit = \"kelvin\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
