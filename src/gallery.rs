//! Gallery filter engine.
//!
//! Derives the visible subset and ordering of the expanded photo list from
//! the current filter selection. Two interface variants share the same
//! unfiltered behavior:
//!
//! - **Folder-scoped** ([`FolderGallery`]): single-select by folder label,
//!   case-insensitive, selecting the active label again clears it.
//! - **Tag-scoped** ([`TagGallery`]): multi-select by tag with AND
//!   semantics — a photo is shown only when it carries *every* selected
//!   tag. Toggling a tag adds it if absent, removes it if present.
//!
//! With no filter active, both variants return a fresh random permutation
//! of the whole list on every recomputation — variety over determinism.
//! The shuffle is seedable so tests and reproducible builds can pin the
//! order; with no seed the clock supplies one. Filtered selections never
//! shuffle and preserve catalog-derived relative order.
//!
//! Filters that match nothing return an empty selection, not an error —
//! callers surface that as an empty-state message.

use crate::expand::PhotoRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Folder-scoped filter state: at most one active folder label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderGallery {
    active: Option<String>,
}

impl FolderGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from deep-link state (e.g. a parsed `?filter=` value).
    pub fn with_active(label: Option<String>) -> Self {
        Self {
            active: label.filter(|l| !l.is_empty()),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether this label is the current selection (case-insensitive).
    pub fn is_selected(&self, label: &str) -> bool {
        self.active
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case(label))
    }

    /// Select a folder label, or clear the filter when the label is
    /// already active. The engine owns this toggle: callers pass the
    /// clicked label, not the desired end state.
    pub fn select(&mut self, label: &str) {
        if self.is_selected(label) {
            self.active = None;
        } else {
            self.active = Some(label.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The photos to display for the current selection.
    ///
    /// Unfiltered: all photos, freshly shuffled (see [`shuffled`]).
    /// Filtered: photos whose folder matches case-insensitively, in
    /// catalog-derived order.
    pub fn selection<'a>(
        &self,
        photos: &'a [PhotoRecord],
        seed: Option<u64>,
    ) -> Vec<&'a PhotoRecord> {
        match self.active.as_deref() {
            None => shuffled(photos, seed),
            Some(label) => photos
                .iter()
                .filter(|p| p.folder.eq_ignore_ascii_case(label))
                .collect(),
        }
    }
}

/// Tag-scoped filter state: a set of selected tags, matched conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGallery {
    active: BTreeSet<String>,
}

impl TagGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from deep-link state (e.g. parsed and validated
    /// `?tags=` tokens).
    pub fn with_active(tags: BTreeSet<String>) -> Self {
        Self { active: tags }
    }

    pub fn active(&self) -> &BTreeSet<String> {
        &self.active
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    /// Toggle one tag: add if absent, remove if present.
    pub fn toggle(&mut self, tag: &str) {
        if !self.active.remove(tag) {
            self.active.insert(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// The photos to display for the current selection.
    ///
    /// Empty set: all photos, freshly shuffled. Otherwise AND semantics:
    /// a photo is included iff its tag list contains every active tag.
    pub fn selection<'a>(
        &self,
        photos: &'a [PhotoRecord],
        seed: Option<u64>,
    ) -> Vec<&'a PhotoRecord> {
        if self.active.is_empty() {
            return shuffled(photos, seed);
        }
        photos
            .iter()
            .filter(|p| self.active.iter().all(|t| p.tags.iter().any(|pt| pt == t)))
            .collect()
    }
}

/// A fresh random permutation of the photos.
///
/// `Some(seed)` gives a deterministic order; `None` seeds from the clock,
/// so repeated calls produce different permutations. Membership and count
/// are always exactly the input's.
pub fn shuffled<'a>(photos: &'a [PhotoRecord], seed: Option<u64>) -> Vec<&'a PhotoRecord> {
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(time_seed));
    let mut out: Vec<&PhotoRecord> = photos.iter().collect();
    out.shuffle(&mut rng);
    out
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
