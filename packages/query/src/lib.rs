#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter, search, and cursor evaluation over the normalized entry list.
//!
//! Everything here is a pure, synchronous function of `(entries, spec)`
//! that performs no I/O. The entry list is treated as immutable for the
//! evaluator's lifetime; the consuming layer owns and mutates the
//! [`FilterSpec`] and re-evaluates on every change.

use std::collections::BTreeSet;

use gi_map_gi_models::GiEntry;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no constraint on this dimension". Not a literal
/// category or state value.
pub const ALL: &str = "All";

/// The active query constraints applied to the entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Classification constraint, or [`ALL`].
    #[serde(rename = "type")]
    pub gi_type: String,
    /// State constraint, or [`ALL`].
    pub state: String,
    /// Free-text search, matched case-insensitively against entry names.
    pub search: String,
}

impl FilterSpec {
    /// A spec that matches every entry.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self {
            gi_type: ALL.to_owned(),
            state: ALL.to_owned(),
            search: String::new(),
        }
    }

    /// Whether the entry satisfies all three constraints.
    ///
    /// The classification comparison is exact and case-sensitive. The state
    /// constraint is a membership test against the full `states` list, so an
    /// entry still matches on a state whose coordinate failed to resolve.
    /// An empty search string matches everything.
    #[must_use]
    pub fn matches(&self, entry: &GiEntry) -> bool {
        (self.gi_type == ALL || entry.category == self.gi_type)
            && (self.state == ALL || entry.states.contains(&self.state))
            && entry
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::unfiltered()
    }
}

/// Evaluates the spec against the full entry list, preserving original list
/// order. No ranking.
#[must_use]
pub fn filter_entries<'a>(entries: &'a [GiEntry], spec: &FilterSpec) -> Vec<&'a GiEntry> {
    entries.iter().filter(|entry| spec.matches(entry)).collect()
}

/// Advances a selection cursor through the filtered set, wrapping from the
/// last match back to the first.
///
/// Returns `None` when the filtered set is empty; callers keep whatever
/// selection they had. With no current selection the first match is
/// returned. The current selection is located by the first index with an
/// equal `id`; a selection that fell out of the filtered set (e.g. after a
/// spec change) advances to the first match.
#[must_use]
pub fn next_match<'a>(
    entries: &'a [GiEntry],
    spec: &FilterSpec,
    current: Option<&GiEntry>,
) -> Option<&'a GiEntry> {
    let filtered = filter_entries(entries, spec);
    let first = *filtered.first()?;

    let Some(current) = current else {
        return Some(first);
    };
    let Some(position) = filtered.iter().position(|entry| entry.id == current.id) else {
        return Some(first);
    };

    Some(filtered[(position + 1) % filtered.len()])
}

/// Selectable filter values derived from the current entry list, each
/// prefixed with the [`ALL`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// `"All"` followed by every distinct classification, sorted.
    pub types: Vec<String>,
    /// `"All"` followed by every distinct state name, sorted.
    pub states: Vec<String>,
}

/// Sorted distinct classification strings across the entries.
#[must_use]
pub fn distinct_types(entries: &[GiEntry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = entries.iter().map(|entry| entry.category.as_str()).collect();
    distinct.into_iter().map(str::to_owned).collect()
}

/// Sorted distinct state names across every entry's `states` list.
#[must_use]
pub fn distinct_states(entries: &[GiEntry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = entries
        .iter()
        .flat_map(|entry| entry.states.iter().map(String::as_str))
        .collect();
    distinct.into_iter().map(str::to_owned).collect()
}

/// Derives the selectable type and state values offered to the user.
#[must_use]
pub fn filter_options(entries: &[GiEntry]) -> FilterOptions {
    let mut types = vec![ALL.to_owned()];
    types.extend(distinct_types(entries));

    let mut states = vec![ALL.to_owned()];
    states.extend(distinct_states(entries));

    FilterOptions { types, states }
}

#[cfg(test)]
mod tests {
    use gi_map_gi_models::ResolvedCoordinate;

    use super::*;

    fn entry(id: &str, name: &str, category: &str, states: &[&str]) -> GiEntry {
        let coordinates = states
            .first()
            .map(|state| ResolvedCoordinate {
                state: (*state).to_owned(),
                lat: 20.0,
                lng: 78.0,
            })
            .into_iter()
            .collect();
        GiEntry::new(
            id.to_owned(),
            name.to_owned(),
            category.to_owned(),
            states.iter().map(|s| (*s).to_owned()).collect(),
            coordinates,
        )
    }

    fn sample() -> Vec<GiEntry> {
        vec![
            entry("1", "Darjeeling Tea", "Agricultural", &["West Bengal"]),
            entry("2", "Kolhapuri Chappal", "Handicraft", &["Maharashtra"]),
            entry(
                "3",
                "Basmati",
                "Agricultural",
                &["Punjab", "Haryana", "Uttar Pradesh"],
            ),
        ]
    }

    #[test]
    fn unfiltered_spec_is_identity() {
        let entries = sample();
        let filtered = filter_entries(&entries, &FilterSpec::unfiltered());
        assert_eq!(filtered.len(), entries.len());
        assert!(
            filtered
                .iter()
                .zip(&entries)
                .all(|(got, expected)| *got == expected)
        );
    }

    #[test]
    fn search_matches_case_insensitive_substring() {
        let entries = sample();
        let spec = FilterSpec {
            search: "tea".to_owned(),
            ..FilterSpec::unfiltered()
        };
        let filtered = filter_entries(&entries, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Darjeeling Tea");
    }

    #[test]
    fn type_match_is_exact_and_case_sensitive() {
        let entries = sample();
        let spec = FilterSpec {
            gi_type: "Agricultural".to_owned(),
            ..FilterSpec::unfiltered()
        };
        assert_eq!(filter_entries(&entries, &spec).len(), 2);

        let spec = FilterSpec {
            gi_type: "agricultural".to_owned(),
            ..FilterSpec::unfiltered()
        };
        assert!(filter_entries(&entries, &spec).is_empty());
    }

    #[test]
    fn state_matches_against_full_states_list() {
        // Haryana is a secondary state with no resolved coordinate in the
        // fixture; membership still counts.
        let entries = sample();
        let spec = FilterSpec {
            state: "Haryana".to_owned(),
            ..FilterSpec::unfiltered()
        };
        let filtered = filter_entries(&entries, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Basmati");
    }

    #[test]
    fn constraints_combine_with_and() {
        let entries = sample();
        let spec = FilterSpec {
            gi_type: "Agricultural".to_owned(),
            state: "West Bengal".to_owned(),
            search: "darjeeling".to_owned(),
        };
        let filtered = filter_entries(&entries, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn cursor_starts_at_first_match() {
        let entries = sample();
        let next = next_match(&entries, &FilterSpec::unfiltered(), None).unwrap();
        assert_eq!(next.id, "1");
    }

    #[test]
    fn cursor_wraps_from_last_to_first() {
        let entries = sample();
        let spec = FilterSpec::unfiltered();
        let last = entries.last().unwrap();
        let next = next_match(&entries, &spec, Some(last)).unwrap();
        assert_eq!(next.id, "1");
    }

    #[test]
    fn cursor_advances_in_filtered_order() {
        let entries = sample();
        let spec = FilterSpec {
            gi_type: "Agricultural".to_owned(),
            ..FilterSpec::unfiltered()
        };
        // Filtered set is [1, 3]; advancing from 1 skips the handicraft row.
        let next = next_match(&entries, &spec, Some(&entries[0])).unwrap();
        assert_eq!(next.id, "3");
    }

    #[test]
    fn cursor_on_empty_filtered_set_is_noop() {
        let entries = sample();
        let spec = FilterSpec {
            search: "no such indication".to_owned(),
            ..FilterSpec::unfiltered()
        };
        assert!(next_match(&entries, &spec, Some(&entries[0])).is_none());
        assert!(next_match(&entries, &spec, None).is_none());
    }

    #[test]
    fn evicted_selection_advances_to_first_match() {
        let entries = sample();
        let spec = FilterSpec {
            gi_type: "Agricultural".to_owned(),
            ..FilterSpec::unfiltered()
        };
        // The handicraft selection no longer matches the spec.
        let next = next_match(&entries, &spec, Some(&entries[1])).unwrap();
        assert_eq!(next.id, "1");
    }

    #[test]
    fn options_are_sorted_with_all_sentinel_first() {
        let entries = sample();
        let options = filter_options(&entries);
        assert_eq!(options.types, vec!["All", "Agricultural", "Handicraft"]);
        assert_eq!(
            options.states,
            vec![
                "All",
                "Haryana",
                "Maharashtra",
                "Punjab",
                "Uttar Pradesh",
                "West Bengal",
            ]
        );
    }

    #[test]
    fn distinct_lists_dedupe_across_entries() {
        let entries = sample();
        assert_eq!(distinct_types(&entries), vec!["Agricultural", "Handicraft"]);
        assert_eq!(distinct_states(&entries).len(), 5);
    }
}
