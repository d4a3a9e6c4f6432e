//! Tagged cell values and their sparsity classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal text treated the same as a missing value.
pub const NULL_LITERAL: &str = "NULL";

/// A single table cell.
///
/// Raw CSV fields arrive as [`Cell::Text`] verbatim, including empty strings.
/// Padding added to short rows is [`Cell::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Text(String),
    Number(f64),
    Absent,
}

/// How a cell counts towards sparsity and header density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Absent, empty text or the `NULL` literal.
    None,
    Numeric,
    String,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Self::Absent => CellKind::None,
            Self::Number(_) => CellKind::Numeric,
            Self::Text(text) if text.is_empty() || text == NULL_LITERAL => CellKind::None,
            Self::Text(_) => CellKind::String,
        }
    }

    /// Returns true for cells classified as [`CellKind::None`].
    pub fn is_none_like(&self) -> bool {
        self.kind() == CellKind::None
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    /// Renders text verbatim, numbers in their shortest form and absent cells as
    /// an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_none_like_cells() {
        assert_eq!(Cell::Absent.kind(), CellKind::None);
        assert_eq!(Cell::text("").kind(), CellKind::None);
        assert_eq!(Cell::text("NULL").kind(), CellKind::None);
        assert_eq!(Cell::text("null").kind(), CellKind::String);
        assert_eq!(Cell::text(" ").kind(), CellKind::String);
        assert_eq!(Cell::Number(0.0).kind(), CellKind::Numeric);
    }

    #[test]
    fn renders_cells() {
        assert_eq!(Cell::Number(1234.0).to_string(), "1234");
        assert_eq!(Cell::Number(0.125).to_string(), "0.125");
        assert_eq!(Cell::text("abc").to_string(), "abc");
        assert_eq!(Cell::Absent.to_string(), "");
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Cell::text("id").as_text(), Some("id"));
        assert_eq!(Cell::Number(1.0).as_text(), None);
        assert_eq!(Cell::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Cell::Absent.as_number(), None);
    }

    #[test]
    fn converts_options() {
        assert_eq!(Cell::from(None::<&str>), Cell::Absent);
        assert_eq!(Cell::from(Some("x")), Cell::text("x"));
        assert_eq!(Cell::from(Some(2.5)), Cell::Number(2.5));
    }
}
