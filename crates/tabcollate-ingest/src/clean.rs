//! Table cleaning: sparse row/column removal, numeric coercion and header
//! detection.

use tabcollate_model::{Cell, CleanOptions, ModelError, Row, Table, TypeCounts};
use tracing::{debug, trace};

use crate::error::CleanError;

/// A rectangular table produced by [`clean`] together with its detected header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedTable {
    rows: Vec<Row>,
    header_index: Option<usize>,
    numcols: usize,
}

impl CleanedTable {
    /// All remaining rows, in source order, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row with the highest share of text cells.
    pub fn header(&self) -> Option<&Row> {
        self.header_index.and_then(|index| self.rows.get(index))
    }

    pub fn header_index(&self) -> Option<usize> {
        self.header_index
    }

    /// Every row except the header, in source order.
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != self.header_index)
            .map(|(_, row)| row)
    }

    pub fn numcols(&self) -> usize {
        self.numcols
    }

    /// Number of rows excluding the header.
    pub fn numrows(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits into the cleaned table, its header and its column count.
    pub fn into_parts(self) -> (Table, Row, usize) {
        let header = self.header().cloned().unwrap_or_default();
        (Table::new(self.rows), header, self.numcols)
    }

    /// Converts into a table whose first row is the header.
    pub fn into_table(mut self) -> Table {
        if let Some(index) = self.header_index {
            let header = self.rows.remove(index);
            self.rows.insert(0, header);
        }
        Table::new(self.rows)
    }
}

/// Cleans a raw, possibly ragged table.
///
/// Rows are padded to equal length, then sparse rows and sparse columns are
/// removed until a pass removes nothing. Remaining text cells are coerced to
/// numbers where they parse, and the header row is detected on the result.
///
/// # Errors
///
/// Returns [`CleanError::InvalidOptions`] for thresholds outside `[0, 1]` and
/// [`CleanError::DegenerateInput`] when rows exist but none of them has a cell.
pub fn clean(raw: &Table, options: &CleanOptions) -> Result<CleanedTable, CleanError> {
    options.validate()?;
    let mut table = raw.filled();
    let mut removed_rows = 0usize;
    let mut removed_cols = 0usize;
    loop {
        let rows = remove_sparse_rows(&mut table, options.row_sparseness)?;
        let cols = remove_sparse_columns(&mut table, options.col_sparseness);
        trace!(rows, cols, "sparsity pass");
        removed_rows += rows;
        removed_cols += cols;
        if table.width() == 0 {
            // Nothing left to measure once every column is gone.
            table.rows.clear();
            break;
        }
        if rows == 0 && cols == 0 {
            break;
        }
    }
    for row in &mut table.rows {
        for cell in row.iter_mut() {
            *cell = coerce_cell(std::mem::replace(cell, Cell::Absent));
        }
    }
    let header_index = detect_header(&table.rows)?;
    let numcols = table.width();
    debug!(
        rows = table.len(),
        numcols, removed_rows, removed_cols, "cleaned table"
    );
    Ok(CleanedTable {
        rows: table.rows,
        header_index,
        numcols,
    })
}

/// Converts numeric-looking text to a number.
///
/// Thousands separators are stripped before parsing. Text ending in `%` is
/// always re-parsed without the suffix and scaled by 1/100, replacing the plain
/// attempt. Text that does not parse, and empty text, is returned unchanged.
pub fn coerce_cell(cell: Cell) -> Cell {
    let Cell::Text(text) = cell else {
        return cell;
    };
    if text.is_empty() {
        return Cell::Text(text);
    }
    let mut coerced = parse_number(&text.replace(',', ""));
    if let Some(stripped) = text.strip_suffix('%') {
        coerced = parse_number(stripped).map(|value| value / 100.0);
    }
    match coerced {
        Some(value) => Cell::Number(value),
        None => Cell::Text(text),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Index of the row with the highest share of text cells; ties keep the
/// earliest row.
///
/// # Errors
///
/// Returns [`CleanError::DegenerateInput`] if a row has no cells.
pub fn detect_header(rows: &[Row]) -> Result<Option<usize>, CleanError> {
    let mut best: Option<(usize, f64)> = None;
    for (index, row) in rows.iter().enumerate() {
        let density = TypeCounts::from_cells(row)
            .string_ratio()
            .map_err(|err| degenerate(err, rows.len()))?;
        match best {
            Some((_, top)) if density <= top => {}
            _ => best = Some((index, density)),
        }
    }
    Ok(best.map(|(index, _)| index))
}

/// Indices of rows whose none-share exceeds `threshold`, highest first.
fn sparse_rows(table: &Table, threshold: f64) -> Result<Vec<usize>, CleanError> {
    let mut sparse = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let ratio = TypeCounts::from_cells(row)
            .none_ratio()
            .map_err(|err| degenerate(err, table.len()))?;
        if ratio > threshold {
            sparse.push(index);
        }
    }
    sparse.reverse();
    Ok(sparse)
}

/// Indices of columns whose none-share exceeds `threshold`, highest first.
fn sparse_columns(table: &Table, threshold: f64) -> Vec<usize> {
    let mut sparse = Vec::new();
    for index in 0..table.width() {
        let counts = TypeCounts::from_cells(table.column(index));
        if counts.none_ratio().is_ok_and(|ratio| ratio > threshold) {
            sparse.push(index);
        }
    }
    sparse.reverse();
    sparse
}

fn remove_sparse_rows(table: &mut Table, threshold: f64) -> Result<usize, CleanError> {
    let sparse = sparse_rows(table, threshold)?;
    for &index in &sparse {
        table.rows.remove(index);
    }
    Ok(sparse.len())
}

fn remove_sparse_columns(table: &mut Table, threshold: f64) -> usize {
    let sparse = sparse_columns(table, threshold);
    for &index in &sparse {
        table.remove_column(index);
    }
    sparse.len()
}

fn degenerate(err: ModelError, rows: usize) -> CleanError {
    match err {
        ModelError::EmptySequence => CleanError::DegenerateInput { rows },
        other => CleanError::InvalidOptions(other),
    }
}
