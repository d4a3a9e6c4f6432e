//! Folder loading: read, clean and collate every file in a directory.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabcollate_model::CleanOptions;
use tracing::{debug, info_span, warn};

use crate::clean::{CleanedTable, clean};
use crate::collection::{Collection, NamedTable, SkippedFile, collate};
use crate::discovery::file_identifier;
use crate::error::{CleanError, IngestError, Result};
use crate::source::{FsSource, TableSource};

/// Options controlling a folder load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub clean: CleanOptions,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clean(mut self, clean: CleanOptions) -> Self {
        self.clean = clean;
        self
    }
}

/// Loads every file in `dir` from the filesystem. See [`load_from`].
pub fn load(dir: &Path, options: &LoadOptions) -> Result<Collection> {
    load_from(&FsSource, dir, options)
}

/// Loads, cleans and collates every file `source` lists for `dir`.
///
/// Files that cannot be read or cleaned, and files that clean down to nothing,
/// are logged and left out; they never abort the load.
///
/// # Errors
///
/// Fails for the whole folder when it cannot be listed, holds no files
/// ([`IngestError::EmptyDirectory`]), or none of its files yields a table
/// ([`IngestError::NoTables`]).
pub fn load_from<S>(source: &S, dir: &Path, options: &LoadOptions) -> Result<Collection>
where
    S: TableSource + ?Sized,
{
    options
        .clean
        .validate()
        .map_err(|err| IngestError::InvalidOptions(CleanError::from(err)))?;

    let span = info_span!("load", dir = %dir.display());
    let _guard = span.enter();

    let files = source.list_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::EmptyDirectory {
            path: dir.to_path_buf(),
        });
    }
    debug!(files = files.len(), "listed files");

    let mut tables = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for path in &files {
        let name = file_identifier(path);
        match load_file(source, path, &options.clean) {
            Ok(cleaned) if cleaned.is_empty() => {
                warn!(file = %name, "table is empty after cleaning, skipping");
                skipped.push(SkippedFile {
                    file: name,
                    reason: "empty after cleaning".to_string(),
                });
            }
            Ok(cleaned) => {
                debug!(
                    file = %name,
                    rows = cleaned.numrows(),
                    numcols = cleaned.numcols(),
                    "loaded table"
                );
                tables.push(NamedTable::new(name, cleaned.into_table()));
            }
            Err(error) => {
                warn!(file = %name, %error, "Something went wrong, skipping file");
                skipped.push(SkippedFile {
                    file: name,
                    reason: error.to_string(),
                });
            }
        }
    }

    collate(dir, tables, skipped)
}

fn load_file<S>(source: &S, path: &Path, options: &CleanOptions) -> Result<CleanedTable>
where
    S: TableSource + ?Sized,
{
    let raw = source.read_table(path)?;
    clean(&raw, options).map_err(|source| IngestError::Degenerate {
        path: path.to_path_buf(),
        source,
    })
}
