//! # Tagfolio
//!
//! A tag-driven static gallery builder for personal photo portfolios.
//! A single hand-authored catalog file is the data source: folders group
//! photos, and every photo carries a free-form tag list that lets it appear
//! under any number of views (country, city, company, team, ...).
//!
//! # Architecture: Expand, Then Derive
//!
//! Tagfolio processes content through one expansion step and several pure
//! derivations over its output:
//!
//! ```text
//! 1. Catalog   catalog.toml  →  TagCatalog      (authored source, loaded once)
//! 2. Expand    TagCatalog    →  [PhotoRecord]   (flat, display-ready records)
//! 3. Derive    [PhotoRecord] →  tag index, filtered selections, HTML pages
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the expanded manifest is human-readable JSON you can
//!   inspect (`tagfolio scan`).
//! - **Testability**: expansion, indexing, and filtering are pure functions
//!   over in-memory data, so unit tests never touch the filesystem.
//! - **Cheap recomputation**: the catalog holds a few dozen records, so every
//!   derived view is recomputed from scratch rather than cached.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Loads the authored `catalog.toml` tag catalog |
//! | [`expand`] | Expands the catalog into flat [`expand::PhotoRecord`]s with derived fields |
//! | [`tags`] | Derives the sorted, deduplicated tag index |
//! | [`gallery`] | Filter engine — folder-scoped and tag-scoped selection with seedable shuffle |
//! | [`urlstate`] | Deep-link query parameter codec (`?filter=` / `?tags=`) |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`theme`] | Durable theme preference behind an injected key-value store |
//! | [`generate`] | Renders the final HTML gallery from the manifest using Maud |
//! | [`output`] | CLI output formatting — inventory display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Tags Over Directories
//!
//! The filesystem layout of the published photos (`/photos/{folder}/...`)
//! is an asset-hosting detail, not the navigation structure. A photo shot at
//! a company retreat belongs to a country, a city, and a team at once; only
//! a tag list expresses that. The catalog keeps the authoring surface small:
//! one line per photo, a filename and its tags.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed HTML is a build error, template variables are
//! Rust expressions, and all interpolation is auto-escaped.
//!
//! ## No Image Processing
//!
//! Tagfolio never decodes or encodes a pixel. Photos are published as-is;
//! the only derived asset is a `.webp` sibling URL offered via `<picture>`
//! when the naming convention promises one. This keeps the binary free of
//! codec dependencies and the build instant.
//!
//! ## Randomized Front Page, Deterministic Everywhere Else
//!
//! The unfiltered gallery shuffles on every build — variety over
//! determinism. The shuffle is seedable: tests and reproducible builds pin
//! a seed in `config.toml`, production builds derive one from the clock.
//! Filtered views never shuffle; they preserve catalog order.
//!
//! ## Every Anomaly Degrades
//!
//! There is no fatal error class past the loading stage. Non-image catalog
//! entries are skipped, stale deep-link tokens are discarded, zero-match
//! filters render an empty state with a clear-filters link.

pub mod catalog;
pub mod config;
pub mod expand;
pub mod gallery;
pub mod generate;
pub mod output;
pub mod tags;
pub mod theme;
pub mod urlstate;

#[cfg(test)]
pub(crate) mod test_helpers;
