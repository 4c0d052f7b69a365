//! Tag catalog loading.
//!
//! The catalog is the sole authored data file: a `catalog.toml` mapping
//! folder keys to lists of `{ filename, tags }` entries. One entry per
//! physical photo file, grouped under the folder it is published from.
//!
//! ## Catalog Format
//!
//! ```toml
//! [[folders.cherry]]
//! filename = "cappadocia-1.jpg"
//! tags = ["Turkey", "Cappadocia", "Cherry"]
//!
//! [[folders.trendyol]]
//! filename = "istanbul-meetup-2022.jpg"
//! tags = ["Turkey", "Istanbul", "Trendyol", "Team"]
//! ```
//!
//! Folder keys iterate in lexicographic order (a `BTreeMap`); entries keep
//! their authored order. The file is edited by hand and deliberately not
//! validated beyond TOML well-formedness — filenames that are not images
//! are authoring convenience (notes, placeholders) and are skipped later
//! by the expander, not rejected here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the catalog file within the content directory.
pub const CATALOG_FILENAME: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("No catalog.toml found in {0}")]
    Missing(std::path::PathBuf),
}

/// One authored photo entry: a filename and its free-form tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub filename: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The full authored catalog: folder key → entries, in authored order.
///
/// Immutable at runtime. Loaded once per invocation; every derived view
/// is recomputed from the expansion of this structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagCatalog {
    #[serde(default)]
    pub folders: BTreeMap<String, Vec<CatalogEntry>>,
}

impl TagCatalog {
    /// Total number of authored entries across all folders, images or not.
    pub fn entry_count(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }
}

/// Load the catalog from `catalog.toml` in the given content directory.
pub fn load_catalog(root: &Path) -> Result<TagCatalog, CatalogError> {
    let path = root.join(CATALOG_FILENAME);
    if !path.exists() {
        return Err(CatalogError::Missing(root.to_path_buf()));
    }
    let content = fs::read_to_string(&path)?;
    let catalog: TagCatalog = toml::from_str(&content)?;
    Ok(catalog)
}
