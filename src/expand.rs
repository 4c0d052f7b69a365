//! Catalog expansion and manifest building.
//!
//! Turns the compact authored [`TagCatalog`](crate::catalog::TagCatalog)
//! into a flat list of display-ready [`PhotoRecord`]s, plus the manifest
//! wrapper the CLI serializes between stages.
//!
//! ## Derived Fields
//!
//! Each record derives everything the gallery needs from two authored
//! strings (folder key, filename) and the tag list:
//!
//! - **`id`**: 1-based counter across the whole traversal (folders in key
//!   order, entries in authored order). Unique within one expansion pass,
//!   but not stable across catalog edits — never persist these.
//! - **`url`**: `{photo_base}/{folder_key}/{filename}`. The raw folder key
//!   is the published directory name; capitalization is display-only.
//! - **`folder`**: folder key with the first character uppercased
//!   (`cherry` → `Cherry`, `USA` → `USA`).
//! - **`alt`**: best-effort human label from the filename — extension
//!   stripped, one trailing numeric suffix dropped, separators spaced,
//!   prefixed with the display folder. A convenience default, not a
//!   contract for accessibility or uniqueness.
//!
//! ## Skipped Entries
//!
//! Entries whose filename lacks a recognized image extension are silently
//! skipped. The catalog is hand-edited; a stray note or placeholder line
//! is authoring noise, not corruption.

use crate::catalog::TagCatalog;
use crate::config::SiteConfig;
use crate::tags::collect_tags;
use serde::{Deserialize, Serialize};

/// Extensions recognized as photos, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// A derived, display-ready representation of one photo.
///
/// Immutable once created. `tags` is a non-aliased copy of the catalog
/// entry's list — insertion order preserved, no dedup within one photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: u32,
    pub url: String,
    pub alt: String,
    pub folder: String,
    pub filename: String,
    pub tags: Vec<String>,
}

/// A folder summary derived from the catalog keys.
///
/// Every catalog key becomes a folder, even one whose entries were all
/// skipped — its filter page simply renders the empty state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Raw catalog key (published directory name).
    pub key: String,
    /// Display label: key with first character uppercased.
    pub label: String,
    /// Number of expanded photo records under this key.
    pub photos: usize,
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryManifest {
    pub photos: Vec<PhotoRecord>,
    pub folders: Vec<Folder>,
    pub tags: Vec<String>,
    pub config: SiteConfig,
}

/// Expand the catalog into flat photo records.
///
/// Pure function of its input: folders iterate in key order, entries in
/// authored order, `id` counts from 1 across the whole traversal. An empty
/// catalog (or one whose entries are all non-images) yields an empty list.
pub fn expand(catalog: &TagCatalog, photo_base: &str) -> Vec<PhotoRecord> {
    let mut photos = Vec::with_capacity(catalog.entry_count());
    let mut id = 1u32;

    for (folder, entries) in &catalog.folders {
        let label = capitalize_folder(folder);
        for entry in entries {
            if !is_image_file(&entry.filename) {
                continue;
            }
            photos.push(PhotoRecord {
                id,
                url: format!("{photo_base}/{folder}/{}", entry.filename),
                alt: alt_text(&entry.filename, &label),
                folder: label.clone(),
                filename: entry.filename.clone(),
                tags: entry.tags.clone(),
            });
            id += 1;
        }
    }

    photos
}

/// Build the full stage-1 manifest: expanded photos plus derived folder
/// summaries and the tag index.
pub fn build_manifest(catalog: &TagCatalog, config: SiteConfig) -> GalleryManifest {
    let photos = expand(catalog, &config.photo_base);
    let folders = catalog
        .folders
        .iter()
        .map(|(key, _)| {
            let label = capitalize_folder(key);
            let count = photos.iter().filter(|p| p.folder == label).count();
            Folder {
                key: key.clone(),
                label,
                photos: count,
            }
        })
        .collect();
    let tags = collect_tags(&photos);

    GalleryManifest {
        photos,
        folders,
        tags,
        config,
    }
}

/// Whether a filename carries a recognized image extension.
pub fn is_image_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Capitalize a folder key for display: first character uppercased, the
/// rest verbatim (`cherry` → `Cherry`, `USA` → `USA`).
pub fn capitalize_folder(folder: &str) -> String {
    let mut chars = folder.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Derive alt text from a filename and display folder.
///
/// Strips the extension, then one trailing `-N`/`_N` suffix, then one
/// trailing ` N` suffix, then spaces remaining separators:
///
/// - `"cappadocia-scene-1.jpg"` + `"Cherry"` → `"Cherry - cappadocia scene"`
/// - `"kyoto-fushimi_inari-1.jpg"` + `"Japan"` → `"Japan - kyoto fushimi inari"`
/// - `"usa-orlando-onlydevs.jpg"` + `"Cherry"` → `"Cherry - usa orlando onlydevs"`
pub fn alt_text(filename: &str, folder_label: &str) -> String {
    let stem = strip_extension(filename);
    let stem = strip_separator_suffix(stem);
    let stem = strip_spaced_suffix(stem);
    let clean = stem.replace(['_', '-'], " ");
    format!("{folder_label} - {clean}")
}

/// Derive the WebP sibling URL for an original photo URL.
///
/// The published directory is assumed to hold a same-stem `.webp` next to
/// every `.jpg`/`.jpeg`/`.png`, except for filenames matched by the
/// configured exception list (where the WebP came out larger than the
/// original and was not published). `.gif` and `.webp` sources offer no
/// separate variant.
pub fn webp_url(url: &str, exceptions: &[String]) -> Option<String> {
    if exceptions
        .iter()
        .any(|e| !e.is_empty() && url.contains(e.as_str()))
    {
        return None;
    }
    let lower = url.to_lowercase();
    for ext in ["jpeg", "jpg", "png"] {
        let suffix = format!(".{ext}");
        if lower.ends_with(&suffix) {
            return Some(format!("{}.webp", &url[..url.len() - suffix.len()]));
        }
    }
    None
}

/// Strip the final `.ext` segment, if any.
fn strip_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem,
        _ => filename,
    }
}

/// Strip one trailing `-N` or `_N` numeric suffix.
fn strip_separator_suffix(stem: &str) -> &str {
    let no_digits = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    if no_digits.len() < stem.len() && (no_digits.ends_with('-') || no_digits.ends_with('_')) {
        return &stem[..no_digits.len() - 1];
    }
    stem
}

/// Strip one trailing ` N` numeric suffix (whitespace-separated).
fn strip_spaced_suffix(stem: &str) -> &str {
    let no_digits = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    if no_digits.len() < stem.len() {
        let no_ws = no_digits.trim_end_matches(char::is_whitespace);
        if no_ws.len() < no_digits.len() {
            return no_ws;
        }
    }
    stem
}
