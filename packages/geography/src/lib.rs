#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]
#![allow(clippy::too_many_lines)]

//! Static coordinate table for Indian states and union territories.
//!
//! The registry export spells state names inconsistently, so the table is
//! many-to-one: several textual keys (alternate spellings, known typos,
//! `(UT)` suffixes) map to the same coordinate. Lookup is an exact string
//! match with no fuzzy matching and no case folding. The table is loaded
//! once and treated as process-wide immutable configuration.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Approximate center coordinate of a state or union territory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateCoordinate {
    /// Canonical spelling of the place this key resolves to.
    pub canonical_name: &'static str,
    /// Latitude of the approximate center.
    pub lat: f64,
    /// Longitude of the approximate center.
    pub lng: f64,
}

const fn place(canonical_name: &'static str, lat: f64, lng: f64) -> StateCoordinate {
    StateCoordinate {
        canonical_name,
        lat,
        lng,
    }
}

/// Maps every state name spelling found in the registry export to its
/// coordinate.
static STATE_COORDINATES: LazyLock<BTreeMap<&'static str, StateCoordinate>> =
    LazyLock::new(|| {
        BTreeMap::from([
            // ── States ──────────────────────────────────────────
            ("Andhra Pradesh", place("Andhra Pradesh", 15.9129, 79.74)),
            ("Arunachal Pradesh", place("Arunachal Pradesh", 28.218, 94.7278)),
            ("Assam", place("Assam", 26.2006, 92.9376)),
            ("Bihar", place("Bihar", 25.0961, 85.3131)),
            ("Chhattisgarh", place("Chhattisgarh", 21.2787, 81.8661)),
            ("Chattisgarh", place("Chhattisgarh", 21.2787, 81.8661)), // alt spelling
            ("Goa", place("Goa", 15.2993, 74.124)),
            ("Gujarat", place("Gujarat", 22.2587, 71.1924)),
            ("Haryana", place("Haryana", 29.0588, 76.0856)),
            ("Himachal Pradesh", place("Himachal Pradesh", 31.1048, 77.1734)),
            ("Jharkhand", place("Jharkhand", 23.6102, 85.2799)),
            ("Karnataka", place("Karnataka", 15.3173, 75.7139)),
            ("Kerala", place("Kerala", 10.8505, 76.2711)),
            ("Madhya Pradesh", place("Madhya Pradesh", 22.9734, 78.6569)),
            ("Maharashtra", place("Maharashtra", 19.7515, 75.7139)),
            ("Manipur", place("Manipur", 24.6637, 93.9063)),
            ("Meghalaya", place("Meghalaya", 25.467, 91.3662)),
            ("Mizoram", place("Mizoram", 23.1645, 92.9376)),
            ("Nagaland", place("Nagaland", 26.1584, 94.5624)),
            ("Odisha", place("Odisha", 20.9517, 85.0985)),
            ("Punjab", place("Punjab", 31.1471, 75.3412)),
            ("Rajasthan", place("Rajasthan", 27.0238, 74.2179)),
            ("Sikkim", place("Sikkim", 27.533, 88.5122)),
            ("Tamil Nadu", place("Tamil Nadu", 11.1271, 78.6569)),
            ("Tamilnadu", place("Tamil Nadu", 11.1271, 78.6569)), // alt spelling
            ("Telangana", place("Telangana", 18.1124, 79.0193)),
            ("Tripura", place("Tripura", 23.9408, 91.9882)),
            ("Uttar Pradesh", place("Uttar Pradesh", 26.8467, 80.9462)),
            ("Uttar Predesh", place("Uttar Pradesh", 26.8467, 80.9462)), // typo in data
            ("Uttarakhand", place("Uttarakhand", 30.0668, 79.0193)),
            ("Uttarkhand", place("Uttarakhand", 30.0668, 79.0193)), // alt spelling
            ("West Bengal", place("West Bengal", 22.9868, 87.855)),
            // ── Union territories ───────────────────────────────
            ("Jammu & Kashmir", place("Jammu & Kashmir", 33.7782, 76.5762)),
            ("Jammu and Kashmir", place("Jammu & Kashmir", 33.7782, 76.5762)),
            ("Jammu & Kashmir (UT)", place("Jammu & Kashmir", 33.7782, 76.5762)),
            ("Ladakh", place("Ladakh", 34.1526, 77.5771)),
            ("Ladakh (UT)", place("Ladakh", 34.1526, 77.5771)),
            ("Delhi", place("Delhi", 28.7041, 77.1025)),
            ("Pondicherry", place("Pondicherry", 11.9416, 79.8083)),
            (
                "Andaman and Nicobar Islands",
                place("Andaman and Nicobar Islands", 11.7401, 92.6586),
            ),
            (
                "Dadara & Nagar Haveli",
                place("Dadara & Nagar Haveli", 20.1809, 73.0169),
            ),
            ("Daman Diu", place("Daman Diu", 20.4283, 72.8397)),
            // ── International registrations ─────────────────────
            ("Peru", place("Peru", -9.19, -75.0152)),
            ("France", place("France", 46.2276, 2.2137)),
            (
                "United States of America",
                place("United States of America", 37.0902, -95.7129),
            ),
            ("United Kingdom", place("United Kingdom", 55.3781, -3.436)),
            ("Italy", place("Italy", 41.8719, 12.5674)),
            ("Portugal", place("Portugal", 39.3999, -8.2245)),
            ("Mexico", place("Mexico", 23.6345, -102.5528)),
            ("Ireland", place("Ireland", 53.1424, -7.6921)),
            ("Chile", place("Chile", -35.6751, -71.543)),
            ("Greece", place("Greece", 39.0742, 21.8243)),
            ("Czech Republic", place("Czech Republic", 49.8175, 15.473)),
            ("Germany", place("Germany", 51.1657, 10.4515)),
            ("Spain", place("Spain", 40.4637, -3.7492)),
            ("Japan", place("Japan", 36.2048, 138.2529)),
            ("Thailand", place("Thailand", 15.87, 100.9925)),
        ])
    });

/// Table keys counted as international when computing the domestic-state
/// summary figure.
///
/// This is a data-quality workaround, not geographic logic: a key is
/// "international" solely because it appears on this list. Keep it in sync
/// with the country entries above.
pub const INTERNATIONAL_NAMES: &[&str] = &[
    "Peru",
    "France",
    "United States of America",
    "United Kingdom",
    "Italy",
    "Portugal",
    "Mexico",
    "Ireland",
    "Chile",
    "Greece",
    "Czech Republic",
    "Germany",
    "Spain",
    "Japan",
    "Thailand",
];

/// Resolves a state name to its coordinate.
///
/// Exact match only. The table already carries the known alternate
/// spellings, so a miss means the registry introduced a spelling we have
/// not seen before.
#[must_use]
pub fn resolve(name: &str) -> Option<&'static StateCoordinate> {
    STATE_COORDINATES.get(name)
}

/// Number of keys in the coordinate table.
#[must_use]
pub fn key_count() -> usize {
    STATE_COORDINATES.len()
}

/// Number of domestic (Indian) keys: all table keys minus the
/// [`INTERNATIONAL_NAMES`] exclusion list.
#[must_use]
pub fn domestic_key_count() -> usize {
    STATE_COORDINATES
        .keys()
        .filter(|key| !INTERNATIONAL_NAMES.contains(key))
        .count()
}
