//! Tag index derivation.
//!
//! The tag index is the sorted, deduplicated union of every photo's tags.
//! It drives the tag-scoped filter UI and validates deep-link tokens —
//! a `?tags=` token that is not in the index is stale and gets discarded.

use crate::expand::PhotoRecord;
use std::collections::BTreeSet;

/// Collect all distinct tags across the photos, sorted ascending.
///
/// Deterministic and pure. Empty input yields empty output.
pub fn collect_tags(photos: &[PhotoRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = photos
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();
    set.into_iter().map(String::from).collect()
}
