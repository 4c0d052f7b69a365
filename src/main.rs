use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tagfolio::expand::GalleryManifest;
use tagfolio::gallery::{FolderGallery, TagGallery};
use tagfolio::{catalog, config, expand, generate, output, theme, urlstate};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "tagfolio")]
#[command(about = "Static gallery builder for tag-driven photo portfolios")]
#[command(long_about = "\
Static gallery builder for tag-driven photo portfolios

A single hand-authored catalog is the data source. Folders group photos
by published directory; free-form tags let one photo appear under any
number of filter views.

Content structure:

  content/
  ├── catalog.toml                 # The photo catalog (required)
  └── config.toml                  # Site config (optional)

Catalog format:

  [[folders.cherry]]
  filename = \"cappadocia-1.jpg\"
  tags = [\"Turkey\", \"Cappadocia\", \"Cherry\"]

Entries without an image extension (.jpg .jpeg .png .webp .gif) are
skipped. Photos are served from {photo_base}/{folder}/{filename}; a
.webp sibling is offered unless the filename is on the exception list.

Run 'tagfolio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory (catalog.toml + optional config.toml)
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest, preferences)
    #[arg(long, default_value = ".tagfolio-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Flags for one filter engine run.
#[derive(clap::Args)]
struct FilterArgs {
    /// Folder label to filter by (single-select, case-insensitive)
    #[arg(long, conflicts_with_all = ["tags", "query"])]
    folder: Option<String>,

    /// Comma-separated tags, matched conjunctively (AND)
    #[arg(long, value_delimiter = ',', conflicts_with = "query")]
    tags: Option<Vec<String>>,

    /// Raw deep-link query string, e.g. "tags=Korea,Seoul" or "filter=Cherry"
    #[arg(long)]
    query: Option<String>,

    /// Shuffle seed for the unfiltered order (overrides config)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Expand the catalog into a manifest
    Scan,
    /// Print the tag index
    Tags,
    /// Run the filter engine once and print the selection
    Filter(FilterArgs),
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate catalog and config without building
    Check,
    /// Read or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme
    Get,
    /// Store a theme (light or dark)
    Set { mode: theme::ThemeMode },
    /// Flip the stored theme
    Toggle,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = load_manifest(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);
            println!();
            println!("Manifest: {}", manifest_path.display());
        }
        Command::Tags => {
            let manifest = load_manifest(&cli.source)?;
            for tag in &manifest.tags {
                println!("{tag}");
            }
        }
        Command::Filter(args) => {
            let manifest = load_manifest(&cli.source)?;
            let seed = args.seed.or(manifest.config.gallery.shuffle_seed);
            let (selection, query) = run_filter(&manifest, &args, seed);
            output::print_filter_output(&selection, &query);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = load_manifest(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let store = theme::FileStore::new(cli.temp_dir.join("prefs"));
            let mode = theme::load_theme(&store);
            let stats = generate::generate(&manifest_path, &cli.output, mode)?;
            output::print_generate_output(&stats);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = load_manifest(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::Theme { action } => {
            let mut store = theme::FileStore::new(cli.temp_dir.join("prefs"));
            match action {
                ThemeAction::Get => println!("{}", theme::load_theme(&store)),
                ThemeAction::Set { mode } => {
                    theme::save_theme(&mut store, mode)?;
                    println!("{mode}");
                }
                ThemeAction::Toggle => println!("{}", theme::toggle_theme(&mut store)?),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load catalog + config from the content directory and expand.
fn load_manifest(source: &Path) -> Result<GalleryManifest, Box<dyn std::error::Error>> {
    let catalog = catalog::load_catalog(source)?;
    let config = config::load_config(source)?;
    Ok(expand::build_manifest(&catalog, config))
}

/// Serialize the manifest into the temp directory.
fn write_manifest(
    manifest: &GalleryManifest,
    temp_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let path = temp_dir.join("manifest.json");
    std::fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

/// Resolve the filter flags into a selection and its deep-link query.
///
/// Deep-link queries and `--tags` flags share the same defensive read:
/// tokens missing from the tag index are silently discarded, and a query
/// with a `filter` parameter wins over a `tags` parameter.
fn run_filter<'a>(
    manifest: &'a GalleryManifest,
    args: &FilterArgs,
    seed: Option<u64>,
) -> (Vec<&'a tagfolio::expand::PhotoRecord>, String) {
    if let Some(query) = &args.query {
        if let Some(label) = urlstate::folder_from_query(query) {
            let gallery = FolderGallery::with_active(Some(label));
            let selection = gallery.selection(&manifest.photos, seed);
            return (selection, urlstate::folder_to_query(gallery.active()));
        }
        let active = urlstate::tags_from_query(query, &manifest.tags);
        let gallery = TagGallery::with_active(active);
        let selection = gallery.selection(&manifest.photos, seed);
        return (selection, urlstate::tags_to_query(gallery.active()));
    }

    if let Some(folder) = &args.folder {
        let mut gallery = FolderGallery::new();
        gallery.select(folder);
        let selection = gallery.selection(&manifest.photos, seed);
        return (selection, urlstate::folder_to_query(gallery.active()));
    }

    if let Some(tags) = &args.tags {
        let mut gallery = TagGallery::new();
        for tag in tags {
            if manifest.tags.iter().any(|t| t == tag) {
                gallery.toggle(tag);
            }
        }
        let selection = gallery.selection(&manifest.photos, seed);
        return (selection, urlstate::tags_to_query(gallery.active()));
    }

    let gallery = FolderGallery::new();
    let selection = gallery.selection(&manifest.photos, seed);
    (selection, String::new())
}
