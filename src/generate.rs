//! HTML gallery generation.
//!
//! Takes the expanded manifest and generates the final static gallery.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): the full photo grid in shuffled order,
//!   no filter active
//! - **Filter pages** (`/filter/{label}/index.html`): one per catalog
//!   folder, photos in catalog order
//!
//! Every page carries the same filter bar. Each button links to its
//! folder's filter page; the button for the page's own folder links back
//! to the index — following a link *is* the toggle, and each click is a
//! distinct history entry. A folder whose entries were all skipped gets a
//! page with the empty-state block and a clear-filters link.
//!
//! ## Photo Cards
//!
//! Each card is a `<picture>` offering the `.webp` sibling when the
//! naming convention promises one, falling back to a plain `<img>` with
//! derived alt text. Images load lazily; broken assets are the browser's
//! problem and degrade per-image.
//!
//! ## CSS
//!
//! Static styles are embedded at compile time from `static/style.css`;
//! color custom properties are generated from `config.toml` and track
//! `prefers-color-scheme`, with an explicit `body.theme-dark` override
//! driven by the stored theme preference.

use crate::config;
use crate::expand::{GalleryManifest, PhotoRecord, webp_url};
use crate::gallery::FolderGallery;
use crate::theme::ThemeMode;
use crate::urlstate::encode_component;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// One generated page, for output reporting.
#[derive(Debug)]
pub struct GeneratedPage {
    /// Output path relative to the output directory.
    pub path: String,
    /// Active folder label, `None` for the index page.
    pub label: Option<String>,
    /// Number of photos on the page.
    pub photos: usize,
}

/// Summary of a generate run.
#[derive(Debug)]
pub struct GenerateStats {
    pub pages: Vec<GeneratedPage>,
}

/// Generate the static gallery from a scan-stage manifest file.
pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    theme: ThemeMode,
) -> Result<GenerateStats, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: GalleryManifest = serde_json::from_str(&manifest_content)?;

    let css = page_css(&manifest);
    let seed = manifest.config.gallery.shuffle_seed;
    let mut pages = Vec::new();

    fs::create_dir_all(output_dir)?;

    // Index page: everything, shuffled
    let unfiltered = FolderGallery::new();
    let selection = unfiltered.selection(&manifest.photos, seed);
    let index_html = render_gallery_page(&manifest, &unfiltered, &selection, &css, theme);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    pages.push(GeneratedPage {
        path: "index.html".to_string(),
        label: None,
        photos: selection.len(),
    });

    // One page per folder filter: catalog order, no shuffle
    for folder in &manifest.folders {
        let gallery = FolderGallery::with_active(Some(folder.label.clone()));
        let selection = gallery.selection(&manifest.photos, seed);
        let page_html = render_gallery_page(&manifest, &gallery, &selection, &css, theme);

        let page_dir = output_dir.join("filter").join(&folder.label);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), page_html.into_string())?;
        pages.push(GeneratedPage {
            path: format!("filter/{}/index.html", folder.label),
            label: Some(folder.label.clone()),
            photos: selection.len(),
        });
    }

    Ok(GenerateStats { pages })
}

/// Full stylesheet for a manifest: config-derived colors + static rules.
pub fn page_css(manifest: &GalleryManifest) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        CSS_STATIC
    )
}

// ============================================================================
// Page renderer
// ============================================================================

/// Renders one gallery page for the given filter state and selection.
pub fn render_gallery_page(
    manifest: &GalleryManifest,
    gallery: &FolderGallery,
    selection: &[&PhotoRecord],
    css: &str,
    theme: ThemeMode,
) -> Markup {
    let content = html! {
        header.gallery-header {
            p.kicker { "Gallery" }
            h1 { (manifest.config.title) }
            p.tagline { (manifest.config.tagline) }
        }
        (filter_bar(manifest, gallery))
        @if selection.is_empty() {
            (empty_state())
        } @else {
            div.photo-grid {
                @for photo in selection {
                    (photo_card(photo, &manifest.config.webp.exceptions))
                }
            }
        }
    };

    base_document(&manifest.config.title, css, theme, content)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, theme: ThemeMode, content: Markup) -> Markup {
    let body_class = match theme {
        ThemeMode::Light => None,
        ThemeMode::Dark => Some("theme-dark"),
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                main.gallery-page {
                    (content)
                }
            }
        }
    }
}

/// Renders the folder filter buttons.
///
/// The active folder's button links back to the index (toggle off);
/// every other button links to its filter page. A separate clear link
/// appears while a filter is active.
fn filter_bar(manifest: &GalleryManifest, gallery: &FolderGallery) -> Markup {
    html! {
        nav.filter-bar {
            @for folder in &manifest.folders {
                @let selected = gallery.is_selected(&folder.label);
                a.filter-button.selected[selected] href=(toggle_href(gallery, &folder.label)) {
                    (folder.label)
                }
            }
            @if gallery.active().is_some() {
                a.clear-link href="/" { "Clear" }
            }
        }
    }
}

/// The link target for one filter button: the folder's page, or the index
/// when the button's folder is already active.
fn toggle_href(gallery: &FolderGallery, label: &str) -> String {
    if gallery.is_selected(label) {
        "/".to_string()
    } else {
        format!("/filter/{}/", encode_component(label))
    }
}

/// Renders one photo card.
fn photo_card(photo: &PhotoRecord, webp_exceptions: &[String]) -> Markup {
    let img = html! {
        img src=(photo.url) alt=(photo.alt) loading="lazy" decoding="async";
    };
    html! {
        figure.photo-card {
            @if let Some(webp) = webp_url(&photo.url, webp_exceptions) {
                picture {
                    source srcset=(webp) type="image/webp";
                    (img)
                }
            } @else {
                (img)
            }
        }
    }
}

/// Renders the zero-result block with its clear-filters affordance.
fn empty_state() -> Markup {
    html! {
        div.empty-state {
            p { "No photos found for this filter" }
            a.clear-link href="/" { "Show all photos" }
        }
    }
}
