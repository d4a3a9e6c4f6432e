//! Command pipeline with explicit stages.
//!
//! Each command is split into library-level stages so the binary only parses
//! arguments and renders results:
//! 1. **Load**: read, clean and collate a folder
//! 2. **Export**: optionally write every collated table back out as CSV
//! 3. **Clean**: clean a single file
//! 4. **Locate**: search a folder tree

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use tabcollate_ingest::{
    CleanedTable, Collection, FileLocator, LoadOptions, MergeReport, clean, load, read_table,
    write_collection,
};
use tabcollate_model::CleanOptions;

// ============================================================================
// Load and export
// ============================================================================

/// Result of loading a folder.
#[derive(Debug)]
pub struct LoadOutcome {
    pub collection: Collection,
    /// CSV files written by the export stage, empty when export was not requested.
    pub written: Vec<PathBuf>,
}

/// Loads, cleans and collates `folder`, then exports into `output_dir` if given.
pub fn load_folder(
    folder: &Path,
    options: &LoadOptions,
    output_dir: Option<&Path>,
) -> Result<LoadOutcome> {
    let span = info_span!("load_folder", folder = %folder.display());
    let _guard = span.enter();
    let start = Instant::now();

    let collection =
        load(folder, options).with_context(|| format!("load {}", folder.display()))?;
    let written = match output_dir {
        Some(dir) => write_collection(&collection, dir)
            .with_context(|| format!("export to {}", dir.display()))?,
        None => Vec::new(),
    };

    info!(
        entries = collection.len(),
        written = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(LoadOutcome {
        collection,
        written,
    })
}

/// Serializes a merge report as pretty-printed JSON.
pub fn report_json(report: &MergeReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize merge report")
}

// ============================================================================
// Clean
// ============================================================================

/// Reads and cleans a single file.
pub fn clean_file(path: &Path, options: &CleanOptions) -> Result<CleanedTable> {
    let raw = read_table(path)?;
    let cleaned = clean(&raw, options).with_context(|| format!("clean {}", path.display()))?;
    info!(
        file = %path.display(),
        rows = cleaned.numrows(),
        numcols = cleaned.numcols(),
        "cleaned file"
    );
    Ok(cleaned)
}

// ============================================================================
// Locate
// ============================================================================

/// What [`locate`] searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateKind {
    File,
    Dir,
    /// Trailing `/`-separated folder names.
    Subroot,
}

/// Searches beneath `root`, failing when nothing matches.
pub fn locate(
    root: &Path,
    name: &str,
    kind: LocateKind,
    max_depth: Option<usize>,
) -> Result<PathBuf> {
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    let mut locator = FileLocator::new(root);
    if let Some(depth) = max_depth {
        locator = locator.with_max_depth(depth);
    }
    let found = match kind {
        LocateKind::File => locator.find_file(name),
        LocateKind::Dir => locator.find_dir(name),
        LocateKind::Subroot => locator.find_subroot(name)?,
    };
    found.with_context(|| format!("{name} not found beneath {}", root.display()))
}
