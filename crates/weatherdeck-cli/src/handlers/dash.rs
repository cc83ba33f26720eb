use anyhow::Result;
use weatherdeck_core::DashboardState;

use crate::ui::tui;

pub fn handle(state: DashboardState) -> Result<()> {
    tui::run_dashboard(state)
}
