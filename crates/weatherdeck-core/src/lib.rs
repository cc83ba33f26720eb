// NOTE: weatherdeck Architecture Rationale
//
// Why id-lists (not copies of records)?
// - The dataset could come from an external source in a future build;
//   derived lists that copy records would need resyncing on every change
// - Search results and favorites stay valid as long as the ids resolve
// - Trade-off: rendering resolves ids on every pass, but the lists can
//   never disagree with the canonical records
//
// Why recompute search results per keystroke (not patch incrementally)?
// - The filter is a pure function of (records, query); recomputing makes
//   drift impossible
// - Incremental patching would need to handle query growth and shrinkage
//   separately, for no measurable win at this dataset size

pub mod error;
pub mod row;
pub mod source;
pub mod state;

pub use error::{Error, Result};
pub use row::{FavoriteAction, RecordRow, format_temperature, render_row, unit_switch_label};
pub use source::{BundledSource, CsvFileSource, JsonFileSource, RecordSource, source_for_path};
pub use state::DashboardState;
