//! Error types for table ingestion.

use std::path::PathBuf;

use tabcollate_model::ModelError;
use thiserror::Error;

/// Errors raised while cleaning a single table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CleanError {
    /// Rows exist but hold no cells, so no proportion can be measured.
    #[error("table has {rows} rows but no cells to measure")]
    DegenerateInput { rows: usize },

    /// Sparsity thresholds are not proportions.
    #[error("invalid cleaning options: {0}")]
    InvalidOptions(#[from] ModelError),
}

/// Errors that can occur while loading a folder of tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Per-file errors (logged and skipped by the loader) ===
    /// File could not be opened or parsed as delimited text.
    #[error("unreadable file {path}: {message}")]
    UnreadableFile { path: PathBuf, message: String },

    /// File parsed but its table could not be cleaned.
    #[error("degenerate table in {path}: {source}")]
    Degenerate {
        path: PathBuf,
        #[source]
        source: CleanError,
    },

    // === Directory-level errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory holds no files, so there is no reference schema.
    #[error("directory has no files: {path}")]
    EmptyDirectory { path: PathBuf },

    /// Every file in the directory was skipped.
    #[error("no file in {path} produced a table")]
    NoTables { path: PathBuf },

    #[error("invalid load options: {0}")]
    InvalidOptions(#[source] CleanError),

    // === Locator and output errors ===
    /// Partial paths are `/`-separated folder names.
    #[error("invalid partial path '{input}': use '/' separated folder names")]
    InvalidPartialPath { input: String },

    #[error("failed to create directory {path}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {message}")]
    WriteFile { path: PathBuf, message: String },
}

impl IngestError {
    /// Returns true for errors confined to one file, which never abort a load.
    pub fn is_file_level(&self) -> bool {
        matches!(self, Self::UnreadableFile { .. } | Self::Degenerate { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
