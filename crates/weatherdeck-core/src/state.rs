//! The view-state controller.
//!
//! `DashboardState` owns the canonical record list and keeps three views
//! in sync with it: the full dataset, the search-filtered subset, and the
//! favorites subset. The derived views hold ids, never record copies.

use crate::error::Result;
use crate::source::{RecordSource, validate_unique_ids};
use weatherdeck_types::{RecordId, TemperatureUnit, WeatherRecord};

/// Ids of records whose city name contains the query, case-insensitively,
/// in canonical dataset order. An empty query matches everything.
pub fn filter_city_ids(records: &[WeatherRecord], query: &str) -> Vec<RecordId> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.city.to_lowercase().contains(&needle))
        .map(|record| record.id)
        .collect()
}

/// Canonical record store plus derived view state.
///
/// All mutation goes through the operations below; each one runs to
/// completion before the next is observable. Nothing here is shared or
/// concurrent.
#[derive(Debug)]
pub struct DashboardState {
    records: Vec<WeatherRecord>,
    query: String,
    search_ids: Vec<RecordId>,
    favorite_ids: Vec<RecordId>,
    unit: TemperatureUnit,
}

impl DashboardState {
    pub fn new(unit: TemperatureUnit) -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            search_ids: Vec::new(),
            favorite_ids: Vec::new(),
            unit,
        }
    }

    /// Populate the canonical record list from a source.
    ///
    /// Resets the search to "show everything". Favorites that no longer
    /// resolve against the new dataset are dropped, so the membership
    /// invariant holds even across a reload.
    pub fn load_initial_data(&mut self, source: &dyn RecordSource) -> Result<()> {
        let records = source.fetch()?;
        validate_unique_ids(&records)?;

        self.records = records;
        self.query.clear();
        self.search_ids = self.records.iter().map(|r| r.id).collect();

        let records = &self.records;
        self.favorite_ids
            .retain(|id| records.iter().any(|record| record.id == *id));
        Ok(())
    }

    /// Recompute the search result ids for a new query.
    ///
    /// Case-insensitive substring match on the city name. An empty query
    /// selects the full dataset; a query matching nothing yields an empty
    /// result list, which is a valid state, not an error.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.search_ids = filter_city_ids(&self.records, query);
    }

    /// Drop the query text and show the full dataset again.
    /// Equivalent to `search("")`.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.search_ids = self.records.iter().map(|r| r.id).collect();
    }

    /// Flip the display unit between Celsius and Fahrenheit.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    /// Append `id` to the favorites, preserving insertion order.
    ///
    /// A no-op when the id is already a favorite, or when it does not
    /// resolve against the canonical dataset.
    pub fn add_favorite(&mut self, id: RecordId) {
        if self.record(id).is_none() {
            return;
        }
        if !self.favorite_ids.contains(&id) {
            self.favorite_ids.push(id);
        }
    }

    /// Remove `id` from the favorites; no-op when it is not one.
    pub fn remove_favorite(&mut self, id: RecordId) {
        self.favorite_ids.retain(|favorite_id| *favorite_id != id);
    }

    /// Materialize records for a list of ids, in the order of `ids`.
    /// Ids with no matching record are silently skipped.
    pub fn resolve_records(&self, ids: &[RecordId]) -> Vec<&WeatherRecord> {
        ids.iter().filter_map(|id| self.record(*id)).collect()
    }

    pub fn record(&self, id: RecordId) -> Option<&WeatherRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_ids(&self) -> &[RecordId] {
        &self.search_ids
    }

    pub fn favorite_ids(&self) -> &[RecordId] {
        &self.favorite_ids
    }

    /// Search results resolved for rendering
    pub fn search_results(&self) -> Vec<&WeatherRecord> {
        self.resolve_records(&self.search_ids)
    }

    /// Favorites resolved for rendering, in insertion order
    pub fn favorites(&self) -> Vec<&WeatherRecord> {
        self.resolve_records(&self.favorite_ids)
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.favorite_ids.contains(&id)
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(TemperatureUnit::Celsius)
    }
}
