#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for normalizing the GI registry export into the map dataset.
//!
//! One-shot batch transform: the whole export is parsed in memory, each row
//! resolves its state columns against the static coordinate table, and the
//! surviving entries plus a summary are written as pretty-printed JSON for
//! the frontend to fetch. There is no incremental mode; rerunning the
//! batch on the same input reproduces the output byte for byte.

pub mod normalize;
pub mod parse;

use std::collections::BTreeMap;

use gi_map_gi_models::{GiEntry, GiSummary};
use thiserror::Error;

/// Fixed name of the registry export consumed by the batch run.
pub const INPUT_FILE: &str = "Total Registered GI details of GI Application in India.txt";

/// Fixed name of the normalized dataset artifact.
pub const DATA_FILE: &str = "processedGIData.json";

/// Fixed name of the summary artifact.
pub const SUMMARY_FILE: &str = "giDataSummary.json";

/// Errors that can occur during the ingestion batch.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the export or writing an artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The export text could not be read as delimited records.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The export has no header row.
    #[error("input has no header row")]
    MissingHeader,

    /// Serializing an artifact failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses and normalizes the export text into the dataset and its summary.
///
/// # Errors
///
/// Returns [`IngestError`] if the text cannot be parsed. Individual state
/// names that miss the coordinate table are per-row diagnostics, never
/// errors.
pub fn process(text: &str) -> Result<(Vec<GiEntry>, GiSummary), IngestError> {
    let rows = parse::parse_rows(text)?;
    log::info!("Parsed {} GI records", rows.len());

    let entries = normalize::normalize_rows(&rows);
    log::info!("Processed {} GI records with coordinates", entries.len());

    let summary = summarize(&entries);
    Ok((entries, summary))
}

/// Computes the batch summary over the emitted entries.
///
/// The type breakdown groups by exact classification string; variant
/// spellings are preserved, not merged. The domestic-state figure counts
/// coordinate-table keys outside the international exclusion list and is
/// independent of the entries themselves.
#[must_use]
pub fn summarize(entries: &[GiEntry]) -> GiSummary {
    let mut type_breakdown: BTreeMap<String, u64> = BTreeMap::new();
    for entry in entries {
        *type_breakdown.entry(entry.category.clone()).or_default() += 1;
    }

    GiSummary {
        total_records: entries.len() as u64,
        type_breakdown,
        indian_states: gi_map_geography::domestic_key_count() as u64,
        types: gi_map_query::distinct_types(entries),
        states: gi_map_query::distinct_states(entries),
    }
}

/// Runs the full batch: read the fixed-name export, normalize, and write
/// both artifacts to the working directory.
///
/// # Errors
///
/// Returns [`IngestError`] if the export is unreadable, unparseable, or an
/// artifact cannot be written. Any such error is fatal to the batch run.
pub fn run() -> Result<(), IngestError> {
    let text = std::fs::read_to_string(INPUT_FILE)?;

    let (entries, summary) = process(&text)?;

    log::info!("GI type distribution:");
    for (gi_type, count) in &summary.type_breakdown {
        log::info!("  {gi_type}: {count}");
    }

    std::fs::write(DATA_FILE, serde_json::to_string_pretty(&entries)?)?;
    log::info!("Saved {} entries to {DATA_FILE}", entries.len());

    std::fs::write(SUMMARY_FILE, serde_json::to_string_pretty(&summary)?)?;
    log::info!("Saved summary to {SUMMARY_FILE}");

    Ok(())
}
