//! Raw CSV reading: every record becomes a row of text cells.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tabcollate_model::{Cell, Row, Table};

use crate::error::{IngestError, Result};

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

/// Reads a comma-delimited file into a ragged table of text cells.
///
/// Fields are kept verbatim (no trimming); only a UTF-8 byte order mark on the
/// first field is dropped. The file handle is released when the reader drops,
/// including on parse failures.
pub fn read_table(path: &Path) -> Result<Table> {
    let reader = builder()
        .from_path(path)
        .map_err(|err| unreadable(path, &err))?;
    collect_rows(reader).map_err(|err| unreadable(path, &err))
}

/// Reads comma-delimited text from any reader. Mostly useful for in-memory sources.
pub fn read_table_from_reader<R: Read>(input: R) -> std::result::Result<Table, csv::Error> {
    collect_rows(builder().from_reader(input))
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> std::result::Result<Table, csv::Error> {
    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Row = record.iter().map(Cell::text).collect();
        if rows.is_empty() {
            strip_bom(&mut row);
        }
        rows.push(row);
    }
    Ok(Table::new(rows))
}

fn strip_bom(row: &mut Row) {
    if let Some(Cell::Text(first)) = row.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
}

fn unreadable(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::UnreadableFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
