//! FILENAME: src/error.rs
//! PURPOSE: Error types for the table engine.
//! CONTEXT: A single recoverable kind exists, `DimensionMismatch`. It is
//! produced by dimensional compatibility checks, by `append_column`, and by
//! the rectangularity-validating constructors. It is never caught
//! internally; every other operation in the crate is total.

use thiserror::Error;

use crate::dims::Dimension;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A supplied list's length disagrees with the table's corresponding
    /// dimension. `axis` names the dimension that was checked, `expected`
    /// the table's count for it, `actual` the list's length.
    #[error("{axis} dimension mismatch: list has {actual} entries, table expects {expected}")]
    DimensionMismatch {
        axis: Dimension,
        expected: usize,
        actual: usize,
    },
}
