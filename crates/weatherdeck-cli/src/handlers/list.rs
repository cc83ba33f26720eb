use anyhow::Result;
use weatherdeck_core::DashboardState;

use crate::presentation::view_models::search_rows;
use crate::types::OutputFormat;
use crate::ui::console;

pub fn handle(
    state: &mut DashboardState,
    search: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    if let Some(query) = search {
        state.search(query);
    }

    let rows = search_rows(state);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => console::print_rows(&rows),
    }

    Ok(())
}
