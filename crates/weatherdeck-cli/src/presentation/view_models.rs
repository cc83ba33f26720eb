//! View-models: display decisions made once, consumed by every surface.
//!
//! The TUI, the console table, and the JSON output all render from these
//! structs, so labels and temperature strings cannot diverge between
//! surfaces.

use serde::Serialize;
use weatherdeck_core::{DashboardState, render_row, unit_switch_label};
use weatherdeck_types::{RecordId, TemperatureUnit, WeatherRecord};

#[derive(Debug, Clone, Serialize)]
pub struct RowViewModel {
    pub id: RecordId,
    pub city: String,
    pub temperature: String,
    pub description: String,
    pub action_label: String,
    pub is_favorite: bool,
}

impl RowViewModel {
    pub fn from_record(record: &WeatherRecord, unit: TemperatureUnit, is_favorite: bool) -> Self {
        let row = render_row(record, unit, is_favorite);
        Self {
            id: row.id,
            city: row.city,
            temperature: row.temperature,
            description: row.description,
            action_label: row.action.label().to_string(),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListViewModel {
    pub title: String,
    pub empty_hint: String,
    pub rows: Vec<RowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub query: String,
    pub unit_label: String,
    pub switch_hint: String,
    pub results: ListViewModel,
    pub favorites: ListViewModel,
}

fn rows_for(records: &[&WeatherRecord], state: &DashboardState) -> Vec<RowViewModel> {
    records
        .iter()
        .map(|record| RowViewModel::from_record(record, state.unit(), state.is_favorite(record.id)))
        .collect()
}

/// Rows for the current search results (the one-shot `list` command and
/// the TUI results panel share this).
pub fn search_rows(state: &DashboardState) -> Vec<RowViewModel> {
    rows_for(&state.search_results(), state)
}

/// Rows for the favorites list, in insertion order.
pub fn favorite_rows(state: &DashboardState) -> Vec<RowViewModel> {
    rows_for(&state.favorites(), state)
}

pub fn dashboard_view_model(state: &DashboardState) -> DashboardViewModel {
    let results = search_rows(state);
    let favorites = favorite_rows(state);

    DashboardViewModel {
        query: state.query().to_string(),
        unit_label: format!("Unit: {}", state.unit().suffix()),
        switch_hint: unit_switch_label(state.unit()).to_string(),
        results: ListViewModel {
            title: format!("Search results ({})", results.len()),
            empty_hint: "No matching records".to_string(),
            rows: results,
        },
        favorites: ListViewModel {
            title: format!("Favorite cities ({})", favorites.len()),
            empty_hint: "No favorites yet - press Enter on a result to add one".to_string(),
            rows: favorites,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherdeck_core::{RecordSource, Result};

    struct Pair;

    impl RecordSource for Pair {
        fn describe(&self) -> String {
            "pair".to_string()
        }

        fn fetch(&self) -> Result<Vec<WeatherRecord>> {
            Ok(vec![
                WeatherRecord::new(1, "New York", 20.0, "Partly cloudy"),
                WeatherRecord::new(2, "Paris", 15.0, "Light rain"),
            ])
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::default();
        state.load_initial_data(&Pair).unwrap();
        state
    }

    #[test]
    fn test_dashboard_view_model_reflects_search_and_favorites() {
        let mut state = loaded_state();
        state.search("par");
        state.add_favorite(RecordId::new(2));

        let model = dashboard_view_model(&state);
        assert_eq!(model.query, "par");
        assert_eq!(model.results.title, "Search results (1)");
        assert_eq!(model.results.rows[0].city, "Paris");
        assert_eq!(model.results.rows[0].action_label, "Remove from favorites");
        assert_eq!(model.favorites.rows[0].city, "Paris");
    }

    #[test]
    fn test_switch_hint_names_the_next_unit() {
        let mut state = loaded_state();
        let model = dashboard_view_model(&state);
        assert_eq!(model.unit_label, "Unit: °C");
        assert_eq!(model.switch_hint, "Switch to Fahrenheit");

        state.toggle_unit();
        let model = dashboard_view_model(&state);
        assert_eq!(model.unit_label, "Unit: °F");
        assert_eq!(model.switch_hint, "Switch to Celsius");
    }

    #[test]
    fn test_row_view_model_converts_for_display_only() {
        let state = loaded_state();
        let rows = search_rows(&state);
        assert_eq!(rows[1].temperature, "15.0°C");

        // The canonical record is untouched by display conversion
        assert_eq!(state.record(RecordId::new(2)).unwrap().temperature_c, 15.0);
    }
}
