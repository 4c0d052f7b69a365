//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary
//! display for every entity (folder, photo, page) is its semantic
//! identity — label or derived title plus positional index — with asset
//! paths and tag lists shown as secondary context via indented `Source:`
//! and `Tags:` lines. This makes the output readable as a content
//! inventory while still letting users trace data back to specific files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Folders
//! 001 Cherry (19 photos)
//!     Source: cherry/
//!     Deep link: /?filter=Cherry
//!
//! Tags
//!     Ankara, Campus, Cappadocia, ... (17 tags)
//! ```
//!
//! ## Filter
//!
//! ```text
//! 7 photos
//! Deep link: /?filter=Trendyol
//! 001 Trendyol - istanbul meetup
//!     Source: /photos/trendyol/istanbul-meetup-2022.jpg
//!     Tags: Turkey, Istanbul, Trendyol, Team
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html (30 photos)
//! 001 Cherry → filter/Cherry/index.html (19 photos)
//!
//! Generated 6 pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::expand::{GalleryManifest, PhotoRecord};
use crate::generate::GenerateStats;
use crate::urlstate;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan stage output showing the expanded catalog inventory.
pub fn format_scan_output(manifest: &GalleryManifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Folders".to_string());
    for (i, folder) in manifest.folders.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} photos)",
            format_index(i + 1),
            folder.label,
            folder.photos
        ));
        lines.push(format!("    Source: {}/", folder.key));
        let query = urlstate::folder_to_query(Some(&folder.label));
        lines.push(format!("    Deep link: {}", urlstate::deep_link(&query)));
    }

    lines.push(String::new());
    lines.push("Tags".to_string());
    if manifest.tags.is_empty() {
        lines.push("    (none)".to_string());
    } else {
        lines.push(format!(
            "    {} ({} tags)",
            manifest.tags.join(", "),
            manifest.tags.len()
        ));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &GalleryManifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Filter output
// ============================================================================

/// Format one filter engine run: selection size, deep link, and per-photo
/// context lines.
pub fn format_filter_output(selection: &[&PhotoRecord], query: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if selection.is_empty() {
        lines.push("No photos found for this filter".to_string());
        lines.push("    Clear: /".to_string());
        return lines;
    }

    lines.push(format!("{} photos", selection.len()));
    lines.push(format!("Deep link: {}", urlstate::deep_link(query)));
    for (i, photo) in selection.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), photo.alt));
        lines.push(format!("    Source: {}", photo.url));
        if !photo.tags.is_empty() {
            lines.push(format!("    Tags: {}", photo.tags.join(", ")));
        }
    }

    lines
}

/// Print filter output to stdout.
pub fn print_filter_output(selection: &[&PhotoRecord], query: &str) {
    for line in format_filter_output(selection, query) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format generate stage output showing generated HTML files.
pub fn format_generate_output(stats: &GenerateStats) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0usize;

    for page in &stats.pages {
        match &page.label {
            None => lines.push(format!("Home → {} ({} photos)", page.path, page.photos)),
            Some(label) => {
                position += 1;
                lines.push(format!(
                    "{} {} → {} ({} photos)",
                    format_index(position),
                    label,
                    page.path,
                    page.photos
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("Generated {} pages", stats.pages.len()));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(stats: &GenerateStats) {
    for line in format_generate_output(stats) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::FolderGallery;
    use crate::generate::GeneratedPage;
    use crate::test_helpers::fixture_manifest;

    #[test]
    fn scan_output_lists_folders_with_counts_and_links() {
        let manifest = fixture_manifest();
        let lines = format_scan_output(&manifest);

        assert_eq!(lines[0], "Folders");
        assert!(lines.contains(&"002 Cherry (19 photos)".to_string()));
        assert!(lines.contains(&"    Deep link: /?filter=Cherry".to_string()));
        assert!(lines.contains(&"    Source: trendyol/".to_string()));
    }

    #[test]
    fn scan_output_includes_tag_index() {
        let manifest = fixture_manifest();
        let lines = format_scan_output(&manifest);
        let tags_line = lines.last().unwrap();
        assert!(tags_line.contains("Cherry"));
        assert!(tags_line.contains("tags)"));
    }

    #[test]
    fn filter_output_shows_selection_and_deep_link() {
        let manifest = fixture_manifest();
        let mut gallery = FolderGallery::new();
        gallery.select("Trendyol");
        let selection = gallery.selection(&manifest.photos, Some(7));

        let query = urlstate::folder_to_query(gallery.active());
        let lines = format_filter_output(&selection, &query);

        assert_eq!(lines[0], "7 photos");
        assert_eq!(lines[1], "Deep link: /?filter=Trendyol");
        assert!(lines.contains(&"001 Trendyol - istanbul meetup".to_string()));
        assert!(
            lines.contains(&"    Source: /photos/trendyol/istanbul-meetup-2022.jpg".to_string())
        );
        assert!(lines.contains(&"    Tags: Turkey, Istanbul, Trendyol, Team".to_string()));
    }

    #[test]
    fn empty_filter_output_degrades_to_empty_state() {
        let lines = format_filter_output(&[], "filter=Atlantis");
        assert_eq!(lines[0], "No photos found for this filter");
        assert_eq!(lines[1], "    Clear: /");
    }

    #[test]
    fn generate_output_lists_pages() {
        let stats = GenerateStats {
            pages: vec![
                GeneratedPage {
                    path: "index.html".to_string(),
                    label: None,
                    photos: 30,
                },
                GeneratedPage {
                    path: "filter/Cherry/index.html".to_string(),
                    label: Some("Cherry".to_string()),
                    photos: 19,
                },
            ],
        };
        let lines = format_generate_output(&stats);
        assert_eq!(lines[0], "Home → index.html (30 photos)");
        assert_eq!(lines[1], "001 Cherry → filter/Cherry/index.html (19 photos)");
        assert_eq!(lines.last().unwrap(), "Generated 2 pages");
    }
}
