//! Row normalization and state-name resolution.
//!
//! Each raw row expands its seven positional state columns, resolves every
//! listed name against the static coordinate table, and becomes a
//! [`GiEntry`] only when at least one name resolved. Names that miss the
//! table stay in `states` (full provenance) while contributing no
//! coordinate, so the frontend plots only resolvable points.

use gi_map_gi_models::{GiEntry, ResolvedCoordinate};

use crate::parse::RawRow;

/// Column holding the registry serial number.
pub const SERIAL_COLUMN: &str = "S.No";
/// Column holding the indication's display name.
pub const NAME_COLUMN: &str = "Geographical Indications";
/// Column holding the free-text goods classification.
pub const CATEGORY_COLUMN: &str = "Goods";
/// Number of parallel state columns in the export.
pub const STATE_COLUMNS: usize = 7;

/// Header of the state column at 1-based `index`: `State`, `State 2`, ...
/// `State 7`.
fn state_column(index: usize) -> String {
    if index == 1 {
        "State".to_owned()
    } else {
        format!("State {index}")
    }
}

/// Normalizes every row, dropping rows where no state resolved.
#[must_use]
pub fn normalize_rows(rows: &[RawRow]) -> Vec<GiEntry> {
    rows.iter().filter_map(normalize_row).collect()
}

/// Normalizes a single row, or `None` when the row has no resolvable state.
///
/// All seven state columns are processed regardless of earlier misses; a
/// miss logs a diagnostic and omits the coordinate, nothing more.
fn normalize_row(row: &RawRow) -> Option<GiEntry> {
    let mut states = Vec::new();
    let mut coordinates = Vec::new();

    for index in 1..=STATE_COLUMNS {
        let Some(name) = row.get(state_column(index).as_str()) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        states.push(name.clone());

        if let Some(coordinate) = gi_map_geography::resolve(name) {
            coordinates.push(ResolvedCoordinate {
                state: name.clone(),
                lat: coordinate.lat,
                lng: coordinate.lng,
            });
        } else {
            log::warn!("No coordinates found for state: {name}");
        }
    }

    if coordinates.is_empty() {
        return None;
    }

    let field = |column: &str| row.get(column).cloned().unwrap_or_default();

    Some(GiEntry::new(
        field(SERIAL_COLUMN),
        field(NAME_COLUMN),
        field(CATEGORY_COLUMN),
        states,
        coordinates,
    ))
}
