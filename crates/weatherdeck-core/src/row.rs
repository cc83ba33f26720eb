//! Row rendering: one record plus the active unit and favorite status,
//! turned into display strings.
//!
//! Pure over its inputs. Conversion always starts from the stored Celsius
//! value, so switching units can never accumulate rounding drift.

use crate::state::DashboardState;
use serde::Serialize;
use weatherdeck_types::{RecordId, TemperatureUnit, WeatherRecord};

/// The action a row offers, decided by current favorite status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    pub fn for_status(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteAction::Remove
        } else {
            FavoriteAction::Add
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FavoriteAction::Add => "Add to favorites",
            FavoriteAction::Remove => "Remove from favorites",
        }
    }

    /// Run the action against the controller.
    pub fn apply(self, state: &mut DashboardState, id: RecordId) {
        match self {
            FavoriteAction::Add => state.add_favorite(id),
            FavoriteAction::Remove => state.remove_favorite(id),
        }
    }
}

/// A display row, ready for any surface (TUI list item, console table
/// line, JSON output).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow {
    pub id: RecordId,
    pub city: String,
    pub temperature: String,
    pub description: String,
    pub action: FavoriteAction,
}

impl RecordRow {
    pub fn action_label(&self) -> &'static str {
        self.action.label()
    }
}

/// One decimal digit plus unit suffix: `"21.0°C"`, `"69.8°F"`.
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{:.1}{}", unit.from_celsius(celsius), unit.suffix())
}

/// Label for the unit-toggle control; names the unit a toggle would
/// switch *to*, not the current one.
pub fn unit_switch_label(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "Switch to Fahrenheit",
        TemperatureUnit::Fahrenheit => "Switch to Celsius",
    }
}

pub fn render_row(record: &WeatherRecord, unit: TemperatureUnit, is_favorite: bool) -> RecordRow {
    RecordRow {
        id: record.id,
        city: record.city.clone(),
        temperature: format_temperature(record.temperature_c, unit),
        description: record.description.clone(),
        action: FavoriteAction::for_status(is_favorite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> WeatherRecord {
        WeatherRecord::new(2, "Paris", 15.0, "Light rain")
    }

    #[test]
    fn test_format_temperature_one_decimal_with_suffix() {
        assert_eq!(format_temperature(21.0, TemperatureUnit::Celsius), "21.0°C");
        assert_eq!(format_temperature(21.0, TemperatureUnit::Fahrenheit), "69.8°F");
        assert_eq!(format_temperature(-2.0, TemperatureUnit::Celsius), "-2.0°C");
    }

    #[test]
    fn test_unit_round_trip_restores_displayed_string() {
        let record = paris();
        let before = render_row(&record, TemperatureUnit::Celsius, false).temperature;

        let mut unit = TemperatureUnit::Celsius;
        unit = unit.toggled();
        unit = unit.toggled();
        let after = render_row(&record, unit, false).temperature;

        assert_eq!(before, after);
    }

    #[test]
    fn test_action_follows_favorite_status() {
        let record = paris();

        let row = render_row(&record, TemperatureUnit::Celsius, false);
        assert_eq!(row.action, FavoriteAction::Add);
        assert_eq!(row.action_label(), "Add to favorites");

        let row = render_row(&record, TemperatureUnit::Celsius, true);
        assert_eq!(row.action, FavoriteAction::Remove);
        assert_eq!(row.action_label(), "Remove from favorites");
    }

    #[test]
    fn test_unit_switch_label_names_next_unit() {
        assert_eq!(unit_switch_label(TemperatureUnit::Celsius), "Switch to Fahrenheit");
        assert_eq!(unit_switch_label(TemperatureUnit::Fahrenheit), "Switch to Celsius");
    }

    #[test]
    fn test_spec_scenario_paris_search_and_favorite() {
        use crate::source::RecordSource;
        use crate::state::DashboardState;

        struct Pair;
        impl RecordSource for Pair {
            fn describe(&self) -> String {
                "pair".to_string()
            }
            fn fetch(&self) -> crate::error::Result<Vec<WeatherRecord>> {
                Ok(vec![
                    WeatherRecord::new(1, "New York", 20.0, "Partly cloudy"),
                    WeatherRecord::new(2, "Paris", 15.0, "Light rain"),
                ])
            }
        }

        let mut state = DashboardState::default();
        state.load_initial_data(&Pair).unwrap();

        state.search("par");
        assert_eq!(state.search_ids(), &[RecordId::new(2)]);

        let results = state.search_results();
        let row = render_row(results[0], state.unit(), state.is_favorite(results[0].id));
        assert_eq!(row.city, "Paris");
        assert_eq!(row.temperature, "15.0°C");

        state.toggle_unit();
        let results = state.search_results();
        let row = render_row(results[0], state.unit(), state.is_favorite(results[0].id));
        assert_eq!(row.temperature, "59.0°F");

        state.add_favorite(RecordId::new(2));
        assert_eq!(state.favorite_ids(), &[RecordId::new(2)]);

        let favorites = state.favorites();
        let row = render_row(favorites[0], state.unit(), state.is_favorite(favorites[0].id));
        assert_eq!(row.action_label(), "Remove from favorites");
    }
}
