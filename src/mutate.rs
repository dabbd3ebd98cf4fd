//! FILENAME: src/mutate.rs
//! PURPOSE: Shape-changing operations: append-column, remove-column,
//! transpose.
//! CONTEXT: "Mutation" is by copy only. Each operation borrows its receiver
//! and returns a newly constructed table (or pair of tables); the input is
//! never modified. Two operations here carry surprising but load-bearing
//! behavior that downstream callers rely on; see `append_column` and
//! `remove_column`.

use crate::dims::Dimension;
use crate::error::TableError;
use crate::select::AxisSpec;
use crate::table::Table;

impl<T: Clone> Table<T> {
    /// Inserts `column[i]` as the new first cell of row `i`.
    ///
    /// Despite the name, the appended column becomes the leftmost column,
    /// not the rightmost; callers depend on that placement. The supplied
    /// list is a column, so its length must equal the table's row count; a
    /// mismatch fails with `DimensionMismatch` naming the column dimension.
    pub fn append_column(&self, column: &[T]) -> Result<Table<T>, TableError> {
        let expected = self.y_dimension();
        if column.len() != expected {
            return Err(TableError::DimensionMismatch {
                axis: Dimension::Column,
                expected,
                actual: column.len(),
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(column)
            .map(|(row, cell)| {
                let mut widened = Vec::with_capacity(row.len() + 1);
                widened.push(cell.clone());
                widened.extend(row.iter().cloned());
                widened
            })
            .collect();
        Ok(Table::from_valid_rows(rows))
    }

    /// Splits off columns: the first element of the returned pair is the
    /// extraction addressed by `spec` (a single index, a range, or an index
    /// list), the second is the remainder.
    ///
    /// The remainder is always every column from position 1 onward: the
    /// structurally first column is dropped regardless of which columns
    /// `spec` extracted. `spec` controls only what is extracted, never what
    /// is removed. Downstream callers rely on this exact coupling, so it is
    /// preserved as-is; callers that only want the remainder can ignore the
    /// first element.
    pub fn remove_column(&self, spec: impl Into<AxisSpec>) -> (Table<T>, Table<T>) {
        let removed = self.columns(spec);
        let remainder = self.columns(1..);
        (removed, remainder)
    }

    /// Transposes the table: output column `i` is input row `i`.
    ///
    /// Index-driven rather than recursive, so depth is bounded on large
    /// tables. Rectangularity is guaranteed by the construction boundaries;
    /// transposing twice returns the original table.
    pub fn transpose(&self) -> Table<T> {
        let (row_count, col_count) = self.dimensions();
        if row_count == 0 || col_count == 0 {
            return Table::empty();
        }
        let rows = (0..col_count)
            .map(|c| (0..row_count).map(|r| self.rows[r][c].clone()).collect())
            .collect();
        Table::from_valid_rows(rows)
    }
}
