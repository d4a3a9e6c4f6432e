//! The capabilities the loader needs from its surroundings.

use std::path::{Path, PathBuf};

use tabcollate_model::Table;

use crate::csv::read_table;
use crate::discovery::list_files;
use crate::error::Result;

/// Where tables come from.
///
/// The loader only lists a folder and reads files as raw rows, so tests and
/// embedders can supply tables without touching the filesystem.
pub trait TableSource {
    /// Files directly inside `dir`, in load order.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Raw, possibly ragged rows of one file.
    fn read_table(&self, path: &Path) -> Result<Table>;
}

/// Reads CSV files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl TableSource for FsSource {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        list_files(dir)
    }

    fn read_table(&self, path: &Path) -> Result<Table> {
        read_table(path)
    }
}
