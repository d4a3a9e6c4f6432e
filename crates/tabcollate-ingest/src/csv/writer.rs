//! CSV export of cleaned and collated tables.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tabcollate_model::Table;
use tracing::info;

use crate::collection::Collection;
use crate::error::{IngestError, Result};
use crate::locate::ensure_folder;

/// Writes a table as comma-delimited text. Numbers are written in their
/// shortest form and absent cells as empty fields.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let write_err = |err: csv::Error| IngestError::WriteFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(write_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .map_err(write_err)?;
    }
    writer.flush().map_err(|err| IngestError::WriteFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Writes every collection entry to `out_dir/<identifier>`, header first.
///
/// `out_dir` is created if missing; its parent must exist.
pub fn write_collection(collection: &Collection, out_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_folder(out_dir)?;
    let mut written = Vec::with_capacity(collection.len());
    for entry in collection.iter() {
        let path = out_dir.join(&entry.name);
        write_table(&path, &entry.table)?;
        info!(path = %path.display(), rows = entry.row_count(), "wrote table");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabcollate_model::Cell;

    #[test]
    fn writes_numbers_and_absent_cells() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![
            vec![Cell::text("id"), Cell::text("share, pct")],
            vec![Cell::Number(1234.0), Cell::Number(0.125)],
            vec![Cell::Number(2.0), Cell::Absent],
        ]);
        write_table(&path, &table).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "id,\"share, pct\"\n1234,0.125\n2,\n");
    }
}
