use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use weatherdeck_core::RecordSource;
use weatherdeck_types::TemperatureUnit;

use crate::config::Config;
use crate::types::OutputFormat;

#[derive(Serialize)]
struct ResolvedConfig<'a> {
    config_path: String,
    config_exists: bool,
    default_unit: TemperatureUnit,
    configured_data_file: Option<&'a Path>,
    active_source: String,
    active_unit: TemperatureUnit,
}

pub fn handle(
    config_path: &Path,
    config: &Config,
    source: &dyn RecordSource,
    active_unit: TemperatureUnit,
    format: OutputFormat,
) -> Result<()> {
    let resolved = ResolvedConfig {
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        default_unit: config.default_unit,
        configured_data_file: config.data_file.as_deref(),
        active_source: source.describe(),
        active_unit,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Plain => {
            println!("{:<22} {}", "Config file:", resolved.config_path);
            if !resolved.config_exists {
                println!("{:<22} (not present, using defaults)", "");
            }
            println!("{:<22} {}", "Default unit:", resolved.default_unit);
            match resolved.configured_data_file {
                Some(path) => println!("{:<22} {}", "Data file:", path.display()),
                None => println!("{:<22} (none configured)", "Data file:"),
            }
            println!("{:<22} {}", "Active source:", resolved.active_source);
            println!("{:<22} {}", "Active unit:", resolved.active_unit);
        }
    }

    Ok(())
}
