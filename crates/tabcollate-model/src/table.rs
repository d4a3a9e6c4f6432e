use serde::{Deserialize, Serialize};

use crate::cell::Cell;

pub type Row = Vec<Cell>;

/// An ordered sequence of rows. Rows may be ragged until the table is filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds a table of text cells, mostly useful for fixtures and CSV input.
    pub fn from_text<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|value| Cell::Text(value.into())).collect())
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Right-pads every row with [`Cell::Absent`] up to the longest row.
    #[must_use]
    pub fn filled(&self) -> Self {
        let width = self.width();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut filled = row.clone();
                filled.resize(width, Cell::Absent);
                filled
            })
            .collect();
        Self { rows }
    }

    /// Cells of one column, top to bottom. Short rows contribute nothing.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Removes a column from every row that has it.
    pub fn remove_column(&mut self, index: usize) {
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}
