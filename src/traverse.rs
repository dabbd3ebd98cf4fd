//! FILENAME: src/traverse.rs
//! PURPOSE: Elementwise and row-wise traversal over tables.
//! CONTEXT: Mapping, folding, and indexed enumeration. Every operation here
//! is a pure function of its input: deterministic, stateless, restartable.

use crate::table::Table;

impl<T> Table<T> {
    /// Applies `f` to every cell, preserving the table's structure.
    pub fn map<U, F>(&self, mut f: F) -> Table<U>
    where
        F: FnMut(&T) -> U,
    {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(&mut f).collect())
            .collect();
        Table::from_valid_rows(rows)
    }

    /// Applies `f` to each row as a whole, producing one result per row.
    pub fn map_rows<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&[T]) -> U,
    {
        self.rows.iter().map(|row| f(row)).collect()
    }
}

impl<T: Clone> Table<T> {
    /// Two-level fold. Each row folds independently into an accumulator
    /// starting from a fresh clone of `seed`; the per-row results then fold
    /// together starting again from `seed`.
    ///
    /// The seed is deliberately applied once per row and once more across
    /// the row results. This is not a flatten-and-fold over all cells in
    /// row-major order; callers depend on the two-level shape.
    pub fn reduce<F>(&self, seed: T, mut f: F) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        let row_results: Vec<T> = self
            .rows
            .iter()
            .map(|row| row.iter().fold(seed.clone(), &mut f))
            .collect();
        row_results.iter().fold(seed, &mut f)
    }

    /// Pairs every cell with its zero-based column index, and every row
    /// with its zero-based row index.
    pub fn with_index(&self) -> Vec<(Vec<(T, usize)>, usize)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let indexed = row
                    .iter()
                    .enumerate()
                    .map(|(c, cell)| (cell.clone(), c))
                    .collect();
                (indexed, r)
            })
            .collect()
    }
}
