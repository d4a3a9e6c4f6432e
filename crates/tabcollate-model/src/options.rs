//! Configuration options for table cleaning.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default maximum share of none-like cells a column may hold.
pub const DEFAULT_COL_SPARSENESS: f64 = 0.1;
/// Default maximum share of none-like cells a row may hold.
pub const DEFAULT_ROW_SPARSENESS: f64 = 0.5;

/// Sparsity thresholds used when cleaning a table.
///
/// A row or column is dropped when its share of none-like cells is strictly
/// greater than the matching threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanOptions {
    pub col_sparseness: f64,
    pub row_sparseness: f64,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            col_sparseness: DEFAULT_COL_SPARSENESS,
            row_sparseness: DEFAULT_ROW_SPARSENESS,
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_col_sparseness(mut self, threshold: f64) -> Self {
        self.col_sparseness = threshold;
        self
    }

    #[must_use]
    pub fn with_row_sparseness(mut self, threshold: f64) -> Self {
        self.row_sparseness = threshold;
        self
    }

    /// Checks that both thresholds are proportions.
    pub fn validate(&self) -> Result<()> {
        check_threshold("col_sparseness", self.col_sparseness)?;
        check_threshold("row_sparseness", self.row_sparseness)
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::InvalidThreshold { name, value })
    }
}
