//! Data model for tabular cleaning and collation.
//!
//! Cells are an explicit tagged type rather than loosely typed strings, so the
//! difference between padding, empty fields and the `NULL` literal is visible
//! in the type while still classifying them alike for sparsity.

pub mod cell;
pub mod counts;
pub mod error;
pub mod options;
pub mod table;

pub use cell::{Cell, CellKind, NULL_LITERAL};
pub use counts::TypeCounts;
pub use error::{ModelError, Result};
pub use options::{CleanOptions, DEFAULT_COL_SPARSENESS, DEFAULT_ROW_SPARSENESS};
pub use table::{Row, Table};
