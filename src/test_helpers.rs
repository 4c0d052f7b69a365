//! Shared test utilities for the tagfolio test suite.
//!
//! Provides the fixture catalog (a copy of the real published data),
//! an inline catalog builder for small cases, and lookup helpers that
//! panic with a clear message on miss.

use std::path::Path;

use crate::catalog::{CatalogEntry, TagCatalog, load_catalog};
use crate::config::SiteConfig;
use crate::expand::{GalleryManifest, PhotoRecord, build_manifest};

// =========================================================================
// Fixtures
// =========================================================================

/// Load the checked-in fixture catalog (`fixtures/content/catalog.toml`).
///
/// Mirrors the real published data: five folders (USA, cherry, japan,
/// korea, trendyol), 29 photos, trendyol with exactly 7 entries.
pub fn fixture_catalog() -> TagCatalog {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    load_catalog(&root).expect("fixture catalog must load")
}

/// The fixture catalog expanded with default config.
pub fn fixture_manifest() -> GalleryManifest {
    build_manifest(&fixture_catalog(), SiteConfig::default())
}

/// Build a small catalog inline: `(folder, [(filename, [tags])])`.
pub fn catalog_of(folders: &[(&str, &[(&str, &[&str])])]) -> TagCatalog {
    let mut catalog = TagCatalog::default();
    for (folder, entries) in folders {
        let entries = entries
            .iter()
            .map(|(filename, tags)| CatalogEntry {
                filename: filename.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        catalog.folders.insert(folder.to_string(), entries);
    }
    catalog
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find a photo by filename. Panics if not found.
pub fn find_photo<'a>(manifest: &'a GalleryManifest, filename: &str) -> &'a PhotoRecord {
    manifest
        .photos
        .iter()
        .find(|p| p.filename == filename)
        .unwrap_or_else(|| {
            let names: Vec<&str> = manifest
                .photos
                .iter()
                .map(|p| p.filename.as_str())
                .collect();
            panic!("photo '{filename}' not found. Available: {names:?}")
        })
}

/// All filenames of a selection, in selection order.
pub fn photo_filenames<'a>(selection: &[&'a PhotoRecord]) -> Vec<&'a str> {
    selection.iter().map(|p| p.filename.as_str()).collect()
}
