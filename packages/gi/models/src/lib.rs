#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical record types for the GI registry dataset.
//!
//! The ingestion pipeline normalizes every registry row into a [`GiEntry`]
//! and the batch summary into a [`GiSummary`]. Both serialize with the wire
//! field names the map frontend reads from `processedGIData.json` and
//! `giDataSummary.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A state name that resolved against the coordinate table, paired with the
/// point where its marker is plotted.
///
/// `state` is the name exactly as it appeared in the source row, not the
/// canonical spelling, since the frontend displays source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCoordinate {
    /// State name as written in the source row.
    pub state: String,
    /// Latitude of the state's approximate center.
    pub lat: f64,
    /// Longitude of the state's approximate center.
    pub lng: f64,
}

/// A registered Geographical Indication, normalized for map display.
///
/// Entries are created once at ingestion time and never mutated. An entry is
/// only materialized when at least one of its state names resolved to a
/// coordinate; rows where every listed state failed resolution are dropped
/// entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiEntry {
    /// Registry serial number, verbatim. Opaque: not guaranteed unique or
    /// numeric.
    pub id: String,
    /// Display name of the indication.
    pub name: String,
    /// Free-text goods classification ("Agricultural", "Handicraft", ...).
    ///
    /// The source data is not a closed enum; variant spellings exist and
    /// are preserved verbatim, never merged here.
    #[serde(rename = "type")]
    pub category: String,
    /// State names in source-column order. The first is the primary state.
    /// Names that failed coordinate resolution stay in this list.
    pub states: Vec<String>,
    /// One plotted point per state name that resolved. Always non-empty for
    /// a materialized entry, and never longer than `states`.
    pub coordinates: Vec<ResolvedCoordinate>,
    /// First entry of `states`, or empty when `states` is empty.
    pub primary_state: String,
    /// Count of entries in `states` (not `coordinates`).
    pub state_count: usize,
}

impl GiEntry {
    /// Builds an entry, deriving `primary_state` and `state_count` from the
    /// `states` list.
    #[must_use]
    pub fn new(
        id: String,
        name: String,
        category: String,
        states: Vec<String>,
        coordinates: Vec<ResolvedCoordinate>,
    ) -> Self {
        let primary_state = states.first().cloned().unwrap_or_default();
        let state_count = states.len();
        Self {
            id,
            name,
            category,
            states,
            coordinates,
            primary_state,
            state_count,
        }
    }
}

/// Summary of one ingestion batch, written alongside the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiSummary {
    /// Number of entries emitted into the dataset.
    pub total_records: u64,
    /// Emitted-entry count per classification string, exact-string grouping.
    /// Variant spellings of the same conceptual category stay separate.
    pub type_breakdown: BTreeMap<String, u64>,
    /// Count of domestic keys in the coordinate table (all keys minus the
    /// international exclusion list).
    pub indian_states: u64,
    /// Sorted distinct classification strings across emitted entries.
    pub types: Vec<String>,
    /// Sorted distinct state names across emitted entries.
    pub states: Vec<String>,
}
