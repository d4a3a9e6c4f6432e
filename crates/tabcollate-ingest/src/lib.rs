//! Table ingestion utilities.
//!
//! This crate loads a folder of delimited files, cleans each table and merges
//! tables that share a header.
//!
//! # Features
//!
//! - **Cleaning**: drop sparse rows and columns, coerce numeric text, detect the header row
//! - **Collation**: merge same-header tables into one, keep the rest as they are
//! - **Discovery**: list a folder's files and locate files or folders beneath a root
//! - **Export**: write collated tables back out as CSV
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabcollate_ingest::{LoadOptions, load};
//!
//! let collection = load(Path::new("data/monthly"), &LoadOptions::default())?;
//! for (index, name) in collection.identifiers().iter().enumerate() {
//!     let (rows, header) = collection.get(index).unwrap();
//!     println!("{name}: {} rows, header {header:?}", rows.len());
//! }
//! ```

mod clean;
mod collection;
mod csv;
mod discovery;
mod error;
mod load;
mod locate;
mod source;

// === Error Types ===
pub use error::{CleanError, IngestError, Result};

// === Cleaning ===
pub use clean::{CleanedTable, clean, coerce_cell, detect_header};

// === Collation ===
pub use collection::{Collection, MergeLine, MergeReport, NamedTable, SkippedFile, collate};
pub use load::{LoadOptions, load, load_from};

// === Files ===
pub use self::csv::{read_table, read_table_from_reader, write_collection, write_table};
pub use discovery::{file_identifier, list_files};
pub use locate::{FileLocator, ensure_folder};
pub use source::{FsSource, TableSource};
