use anyhow::{Context, Result};
use std::path::Path;
use weatherdeck_core::DashboardState;

use crate::types::ExportFormat;

pub fn handle(state: &DashboardState, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let content = match format {
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(state.records())?;
            json.push('\n');
            json
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in state.records() {
                writer.serialize(record)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {}", e))?;
            String::from_utf8(bytes).context("CSV output was not valid UTF-8")?
        }
    };

    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write export to {}", path.display()))?,
        None => print!("{}", content),
    }

    Ok(())
}
