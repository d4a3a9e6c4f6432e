//! Collated tables and the diagnostics of a merge pass.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tabcollate_model::{Row, Table};
use tracing::info;

use crate::error::{IngestError, Result};

/// A named table whose first row is its header.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable {
    pub name: String,
    pub table: Table,
}

impl NamedTable {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn header(&self) -> Option<&Row> {
        self.table.rows.first()
    }

    /// Rows after the header.
    pub fn data(&self) -> &[Row] {
        self.table.rows.get(1..).unwrap_or_default()
    }

    /// Table length minus the header row.
    pub fn row_count(&self) -> usize {
        self.table.len().saturating_sub(1)
    }
}

/// One line of merge diagnostics per loaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeLine {
    pub file: String,
    pub rows: usize,
    /// Running total of rows seen so far, merged or not.
    pub total_rows: usize,
    pub merged: bool,
}

impl fmt::Display for MergeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.total_rows.to_string().len();
        write!(
            f,
            "{} {:0width$} Rows {} Total Rows",
            self.file, self.rows, self.total_rows
        )
    }
}

/// A file that contributed nothing to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// What happened to each file during collation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub lines: Vec<MergeLine>,
    pub skipped: Vec<SkippedFile>,
    /// Entry holding the merged rows.
    pub merged_into: String,
    /// Number of entries in the resulting collection.
    pub entries: usize,
}

impl MergeReport {
    pub fn total_rows(&self) -> usize {
        self.lines.last().map_or(0, |line| line.total_rows)
    }

    pub fn merged_files(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .filter(|line| line.merged)
            .map(|line| line.file.as_str())
    }

    pub fn unmerged_files(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .filter(|line| !line.merged)
            .map(|line| line.file.as_str())
    }

    /// One-line summary, e.g. `2 Sheets 12 Total Rows`.
    pub fn summary(&self) -> String {
        format!("{} Sheets {} Total Rows", self.entries, self.total_rows())
    }
}

/// Cleaned tables of a folder after same-header tables have been merged.
///
/// Unmerged files keep their own entries in load order; the merged table comes
/// last, named after the first file that matched the reference header.
#[derive(Debug, Clone)]
pub struct Collection {
    dir: PathBuf,
    entries: Vec<NamedTable>,
    report: MergeReport,
}

impl Collection {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn identifiers(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn row_counts(&self) -> Vec<usize> {
        self.entries.iter().map(NamedTable::row_count).collect()
    }

    pub fn headers(&self) -> Vec<&Row> {
        self.entries.iter().filter_map(NamedTable::header).collect()
    }

    /// Data rows and header of the entry at `index` in [`Self::identifiers`].
    pub fn get(&self, index: usize) -> Option<(&[Row], &Row)> {
        let entry = self.entries.get(index)?;
        let (header, data) = entry.table.rows.split_first()?;
        Some((data, header))
    }

    pub fn by_name(&self, name: &str) -> Option<&NamedTable> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedTable> {
        self.entries.iter()
    }

    pub fn report(&self) -> &MergeReport {
        &self.report
    }

    pub fn into_entries(self) -> Vec<NamedTable> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a NamedTable;
    type IntoIter = std::slice::Iter<'a, NamedTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} files in the folder {}",
            self.entries.len(),
            self.dir.display()
        )?;
        write!(f, "{:?}", self.identifiers())
    }
}

/// Merges tables sharing the reference header into one accumulator table.
///
/// The first table with a header defines the reference header. Every table
/// whose header equals it, the first included, contributes its data rows to
/// the accumulator, which is stored under the first table's name. Other tables
/// are kept as they are. Tables without a header are reported as skipped.
///
/// # Errors
///
/// Returns [`IngestError::NoTables`] if no table has a header.
pub fn collate(
    dir: impl Into<PathBuf>,
    tables: Vec<NamedTable>,
    mut skipped: Vec<SkippedFile>,
) -> Result<Collection> {
    let dir = dir.into();
    let mut usable = Vec::with_capacity(tables.len());
    for named in tables {
        if named.table.is_empty() {
            skipped.push(SkippedFile {
                file: named.name,
                reason: "no header row".to_string(),
            });
        } else {
            usable.push(named);
        }
    }
    let mut usable = usable.into_iter();
    let Some(first) = usable.next() else {
        return Err(IngestError::NoTables { path: dir });
    };

    let merged_into = first.name.clone();
    let mut accumulator = first.table.rows;

    let mut total_rows = accumulator.len() - 1;
    let mut lines = vec![MergeLine {
        file: merged_into.clone(),
        rows: total_rows,
        total_rows,
        merged: true,
    }];
    info!("Sheets attempting merge...");
    info!("{}", lines[0]);

    let mut entries = Vec::new();
    for mut named in usable {
        let rows = named.row_count();
        total_rows += rows;
        let merged = named.header() == accumulator.first();
        let line = MergeLine {
            file: named.name.clone(),
            rows,
            total_rows,
            merged,
        };
        if merged {
            accumulator.extend(named.table.rows.drain(1..));
        } else {
            info!("{} not merged", named.name);
            entries.push(named);
        }
        info!("{line}");
        lines.push(line);
    }
    entries.push(NamedTable::new(merged_into.clone(), Table::new(accumulator)));

    let report = MergeReport {
        lines,
        skipped,
        merged_into,
        entries: entries.len(),
    };
    info!("{}", report.summary());
    Ok(Collection {
        dir,
        entries,
        report,
    })
}
