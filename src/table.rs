//! FILENAME: src/table.rs
//! PURPOSE: Defines the `Table` value type and its construction operations.
//! CONTEXT: This file contains the `Table<T>` struct, the crate's central
//! abstraction: a dense, rectangular, row-major collection of cells. Tables
//! are immutable values; every operation borrows its receiver and returns a
//! newly constructed table or scalar. Rectangularity is enforced at the
//! construction boundaries so the rest of the crate can index freely.

use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::dims::Dimension;
use crate::error::TableError;

/// A dense, rectangular, in-memory table: an ordered sequence of rows, each
/// an ordered sequence of cells of type `T`.
///
/// All rows have equal length. The canonical empty table is a single empty
/// row, representing "no data"; every degenerate construction (zero rows,
/// zero columns, empty input) collapses to it. Row order and intra-row cell
/// order are never implicitly reordered by storage, only by explicit
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table<T> {
    /// Row-major storage. Invariant: all rows share the same length.
    pub(crate) rows: Vec<Vec<T>>,
}

/// Mirror of the serialized layout. Deserialization lands here first, then
/// routes through `from_rows` so external data cannot smuggle ragged rows
/// past the rectangularity invariant.
#[derive(Deserialize)]
struct RawTable<T> {
    rows: Vec<Vec<T>>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Table<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTable::deserialize(deserializer)?;
        Table::from_rows(raw.rows).map_err(de::Error::custom)
    }
}

/// Conversion from a row source into an owned row.
///
/// Lets [`Table::wrap`] accept nested `Vec`s, fixed-size arrays, and
/// homogeneous tuples interchangeably; tuples are converted to rows before
/// wrapping.
pub trait IntoRow<T> {
    fn into_row(self) -> Vec<T>;
}

impl<T> IntoRow<T> for Vec<T> {
    fn into_row(self) -> Vec<T> {
        self
    }
}

impl<T, const N: usize> IntoRow<T> for [T; N] {
    fn into_row(self) -> Vec<T> {
        self.into()
    }
}

impl<T> IntoRow<T> for (T,) {
    fn into_row(self) -> Vec<T> {
        vec![self.0]
    }
}

impl<T> IntoRow<T> for (T, T) {
    fn into_row(self) -> Vec<T> {
        vec![self.0, self.1]
    }
}

impl<T> IntoRow<T> for (T, T, T) {
    fn into_row(self) -> Vec<T> {
        vec![self.0, self.1, self.2]
    }
}

impl<T> IntoRow<T> for (T, T, T, T) {
    fn into_row(self) -> Vec<T> {
        vec![self.0, self.1, self.2, self.3]
    }
}

impl<T> IntoRow<T> for (T, T, T, T, T) {
    fn into_row(self) -> Vec<T> {
        vec![self.0, self.1, self.2, self.3, self.4]
    }
}

impl<T> IntoRow<T> for (T, T, T, T, T, T) {
    fn into_row(self) -> Vec<T> {
        vec![self.0, self.1, self.2, self.3, self.4, self.5]
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<T> Table<T> {
    /// Creates the canonical empty table: a single empty row.
    pub fn empty() -> Self {
        Table {
            rows: vec![Vec::new()],
        }
    }

    /// Builds a table by evaluating `generator(r, c)` for every cell.
    ///
    /// The generator arguments are 1-indexed: `r` runs over
    /// `1..=row_count`, `c` over `1..=col_count`. The generator should be a
    /// pure function of its two arguments. A zero row or column count
    /// yields the canonical empty table.
    pub fn build<F>(row_count: usize, col_count: usize, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        if row_count == 0 || col_count == 0 {
            return Table::empty();
        }
        let rows = (1..=row_count)
            .map(|r| (1..=col_count).map(|c| generator(r, c)).collect())
            .collect();
        Table { rows }
    }

    /// Wraps row-major input directly. Row sources may be `Vec`s,
    /// fixed-size arrays, or homogeneous tuples of arity 1 through 6.
    ///
    /// Validates rectangularity: every row must match the first row's
    /// length, otherwise fails with `DimensionMismatch` on the column
    /// dimension.
    pub fn wrap<R, I>(input: I) -> Result<Self, TableError>
    where
        R: IntoRow<T>,
        I: IntoIterator<Item = R>,
    {
        let rows = input.into_iter().map(IntoRow::into_row).collect();
        Table::from_rows(rows)
    }

    /// Wraps a row-major nested sequence, validating rectangularity.
    ///
    /// Empty input (no rows, or rows without cells) yields the canonical
    /// empty table.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, TableError> {
        let col_count = rows.first().map_or(0, Vec::len);
        for row in &rows {
            if row.len() != col_count {
                return Err(TableError::DimensionMismatch {
                    axis: Dimension::Column,
                    expected: col_count,
                    actual: row.len(),
                });
            }
        }
        if col_count == 0 {
            return Ok(Table::empty());
        }
        Ok(Table { rows })
    }

    /// Wraps raw rows that are already known to be rectangular (produced by
    /// indexing an existing table), canonicalizing degenerate shapes to the
    /// empty table.
    pub(crate) fn from_valid_rows(rows: Vec<Vec<T>>) -> Self {
        if rows.first().map_or(true, Vec::is_empty) {
            return Table::empty();
        }
        Table { rows }
    }
}

impl<T: Clone> Table<T> {
    /// Treats the input as column-major and transposes it into row-major
    /// storage. Validates that all columns have equal length.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self, TableError> {
        let column_major = Table::from_rows(columns)?;
        Ok(column_major.transpose())
    }
}

impl Table<f64> {
    /// Builds a table of uniformly distributed values in `[0, 1)`.
    pub fn build_random(row_count: usize, col_count: usize) -> Self {
        let mut rng = rand::rng();
        Table::build(row_count, col_count, |_, _| rng.random())
    }
}

// ============================================================================
// ROW ACCESS
// ============================================================================

impl<T> Table<T> {
    /// Returns `true` for the canonical empty table.
    pub fn is_empty(&self) -> bool {
        self.rows.first().map_or(true, Vec::is_empty)
    }

    /// Borrows a single row, or `None` if `index` is out of bounds.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Borrows the row-major storage.
    pub fn as_rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Consumes the table, yielding its row-major storage.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generator_is_one_indexed() {
        let t = Table::build(2, 3, |r, c| (r, c));
        assert_eq!(t.row(0), Some(&[(1, 1), (1, 2), (1, 3)][..]));
        assert_eq!(t.row(1), Some(&[(2, 1), (2, 2), (2, 3)][..]));
    }

    #[test]
    fn test_build_degenerate_counts_yield_empty() {
        let zero_rows: Table<i32> = Table::build(0, 5, |_, _| 0);
        let zero_cols: Table<i32> = Table::build(5, 0, |_, _| 0);
        assert_eq!(zero_rows, Table::empty());
        assert_eq!(zero_cols, Table::empty());
    }

    #[test]
    fn test_build_random_range() {
        let t = Table::build_random(4, 4);
        assert_eq!(t.dimensions(), (4, 4));
        for row in t.as_rows() {
            for &cell in row {
                assert!((0.0..1.0).contains(&cell));
            }
        }
    }

    #[test]
    fn test_wrap_accepts_tuples() {
        let t = Table::wrap(vec![(1, 2), (3, 4), (5, 6)]).unwrap();
        assert_eq!(t, Table::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap());
    }

    #[test]
    fn test_wrap_accepts_single_element_tuples() {
        let t = Table::wrap(vec![(1,), (2,), (3,)]).unwrap();
        assert_eq!(t.dimensions(), (3, 1));
        assert_eq!(t.at(1, 0), Some(&2));
    }

    #[test]
    fn test_wrap_accepts_arrays() {
        let t = Table::wrap(vec![[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(t.dimensions(), (2, 3));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Table::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            TableError::DimensionMismatch {
                axis: Dimension::Column,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_from_rows_empty_input_is_canonical_empty() {
        let no_rows: Table<i32> = Table::from_rows(vec![]).unwrap();
        let empty_rows: Table<i32> = Table::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(no_rows, Table::empty());
        assert_eq!(empty_rows, Table::empty());
        assert!(no_rows.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_ragged_rows() {
        // Ragged rows must not cross the construction boundary; accepting
        // them would let later indexing operations panic.
        let err = serde_json::from_str::<Table<i32>>(r#"{"rows":[[1,2],[3]]}"#).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }

    #[test]
    fn test_deserialize_validates_like_from_rows() {
        let t: Table<i32> = serde_json::from_str(r#"{"rows":[[1,2],[3,4]]}"#).unwrap();
        assert_eq!(t, Table::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap());
        assert_eq!(t.transpose().dimensions(), (2, 2));

        let empty: Table<i32> = serde_json::from_str(r#"{"rows":[[],[]]}"#).unwrap();
        assert_eq!(empty, Table::empty());
    }

    #[test]
    fn test_from_columns_transposes_into_row_major() {
        let t = Table::from_columns(vec![vec![1, 3, 5], vec![2, 4, 6]]).unwrap();
        assert_eq!(t, Table::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap());
    }

    #[test]
    fn test_from_columns_rejects_ragged_columns() {
        assert!(Table::from_columns(vec![vec![1, 2], vec![3]]).is_err());
    }
}
