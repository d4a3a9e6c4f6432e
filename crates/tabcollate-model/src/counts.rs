//! Per-row and per-column type counts.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellKind};
use crate::error::{ModelError, Result};

/// Number of cells of each [`CellKind`] in a row or column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    pub none: usize,
    pub numeric: usize,
    pub string: usize,
}

impl TypeCounts {
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut counts = Self::default();
        for cell in cells {
            match cell.kind() {
                CellKind::None => counts.none += 1,
                CellKind::Numeric => counts.numeric += 1,
                CellKind::String => counts.string += 1,
            }
        }
        counts
    }

    pub fn total(self) -> usize {
        self.none + self.numeric + self.string
    }

    /// Share of none-like cells.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] when there are no cells to divide by.
    pub fn none_ratio(self) -> Result<f64> {
        self.ratio(self.none)
    }

    pub fn numeric_ratio(self) -> Result<f64> {
        self.ratio(self.numeric)
    }

    pub fn string_ratio(self) -> Result<f64> {
        self.ratio(self.string)
    }

    fn ratio(self, count: usize) -> Result<f64> {
        match self.total() {
            0 => Err(ModelError::EmptySequence),
            total => Ok(count as f64 / total as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_kind_once() {
        let row = vec![
            Cell::text("id"),
            Cell::Number(3.0),
            Cell::text(""),
            Cell::text("NULL"),
            Cell::Absent,
        ];
        let counts = TypeCounts::from_cells(&row);
        assert_eq!(counts.none, 3);
        assert_eq!(counts.numeric, 1);
        assert_eq!(counts.string, 1);
        assert_eq!(counts.total(), row.len());
        assert!((counts.none_ratio().unwrap() - 0.6).abs() < 1e-12);
        assert!((counts.numeric_ratio().unwrap() - 0.2).abs() < 1e-12);
        assert!((counts.string_ratio().unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_has_no_ratio() {
        let counts = TypeCounts::from_cells(&Vec::<Cell>::new());
        assert!(matches!(counts.none_ratio(), Err(ModelError::EmptySequence)));
        assert!(counts.numeric_ratio().is_err());
        assert!(counts.string_ratio().is_err());
    }
}
