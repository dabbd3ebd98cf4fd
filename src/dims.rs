//! FILENAME: src/dims.rs
//! PURPOSE: Shape derivation and dimensional compatibility checking.
//! CONTEXT: This module defines the `Dimension` axis selector and the
//! operations that derive a table's row/column counts or validate a
//! candidate list's length against them.
//!
//! NOTE ON NUMBERING: the numeric codes are inverted relative to the common
//! row=0 convention. `Row` is code 1 and `Column` is code 0. Downstream
//! callers were written against this numbering and it is preserved as-is;
//! use the enum variants rather than raw codes wherever possible.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TableError;
use crate::table::Table;

/// Axis selector for dimensional compatibility checks.
///
/// `Row` (code 1) checks a list's length against the table's row count;
/// `Column` (code 0) checks against the column count. See the module notes
/// for the non-conventional numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// Code 0: column-count check.
    Column,
    /// Code 1: row-count check.
    Row,
}

impl Dimension {
    /// Maps a raw numeric code to its axis: 0 is `Column`, 1 is `Row`.
    pub fn from_code(code: u8) -> Option<Dimension> {
        match code {
            0 => Some(Dimension::Column),
            1 => Some(Dimension::Row),
            _ => None,
        }
    }

    /// The raw numeric code for this axis.
    pub fn code(&self) -> u8 {
        match self {
            Dimension::Column => 0,
            Dimension::Row => 1,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Column => write!(f, "column"),
            Dimension::Row => write!(f, "row"),
        }
    }
}

impl<T> Table<T> {
    /// Returns `(row_count, col_count)`.
    ///
    /// The row count is the number of non-empty rows, so the canonical
    /// empty table reports `(0, 0)`. The column count is the first row's
    /// length; rectangularity beyond the first row is guaranteed by the
    /// construction boundaries rather than re-verified here.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.y_dimension(), self.x_dimension())
    }

    /// Column count: the horizontal extent of the table.
    pub fn x_dimension(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Row count: the vertical extent of the table. Counts non-empty rows
    /// only, so the canonical empty table reports zero.
    pub fn y_dimension(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_empty()).count()
    }

    /// Validates a candidate list's length against one of the table's
    /// dimensions. The list's element type is irrelevant; only its length
    /// is checked.
    ///
    /// Fails with [`TableError::DimensionMismatch`] when the list's length
    /// disagrees with the count selected by `dimension`, naming the
    /// mismatched axis and both counts. Total otherwise.
    pub fn check_dimensional_compatibility<L>(
        &self,
        list: &[L],
        dimension: Dimension,
    ) -> Result<(), TableError> {
        let expected = match dimension {
            Dimension::Row => self.y_dimension(),
            Dimension::Column => self.x_dimension(),
        };
        if list.len() != expected {
            return Err(TableError::DimensionMismatch {
                axis: dimension,
                expected,
                actual: list.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table<i32> {
        Table::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap()
    }

    #[test]
    fn test_dimensions_of_build() {
        for r in 1..5 {
            for c in 1..5 {
                let t = Table::build(r, c, |a, b| a * b);
                assert_eq!(t.dimensions(), (r, c));
            }
        }
    }

    #[test]
    fn test_dimensions_of_empty_table() {
        let t: Table<i32> = Table::empty();
        assert_eq!(t.dimensions(), (0, 0));
        assert_eq!(t.x_dimension(), 0);
        assert_eq!(t.y_dimension(), 0);
    }

    #[test]
    fn test_dimension_codes_are_inverted() {
        assert_eq!(Dimension::Column.code(), 0);
        assert_eq!(Dimension::Row.code(), 1);
        assert_eq!(Dimension::from_code(0), Some(Dimension::Column));
        assert_eq!(Dimension::from_code(1), Some(Dimension::Row));
        assert_eq!(Dimension::from_code(2), None);
    }

    #[test]
    fn test_dimension_axis_names() {
        assert_eq!(Dimension::Row.to_string(), "row");
        assert_eq!(Dimension::Column.to_string(), "column");
    }

    #[test]
    fn test_check_row_compatibility() {
        let t = sample();
        assert!(t.check_dimensional_compatibility(&[0, 0, 0], Dimension::Row).is_ok());
        let err = t
            .check_dimensional_compatibility(&[0, 0], Dimension::Row)
            .unwrap_err();
        assert_eq!(
            err,
            TableError::DimensionMismatch {
                axis: Dimension::Row,
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_check_column_compatibility() {
        let t = sample();
        // Only the list's length matters, not its element type.
        assert!(t.check_dimensional_compatibility(&["a", "b"], Dimension::Column).is_ok());
        assert!(t.check_dimensional_compatibility(&[1, 2, 3], Dimension::Column).is_err());
    }

    #[test]
    fn test_mismatch_message_names_axis_and_counts() {
        let err = sample()
            .check_dimensional_compatibility(&[0; 5], Dimension::Row)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row"));
        assert!(message.contains('3'));
        assert!(message.contains('5'));
    }
}
