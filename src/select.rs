//! FILENAME: src/select.rs
//! PURPOSE: Point, range, and index-list selection producing sub-tables.
//! CONTEXT: This module defines `AxisSpec`, the tagged addressing variant
//! used along one axis, and the selection operations built on it. The two
//! spec shapes carry deliberately different filtering rules: a contiguous
//! span clamps to the table's bounds, while an explicit index list is
//! "reorder-and-filter": the result follows the requested order and
//! out-of-bounds indices are silently dropped.

use serde::{Deserialize, Serialize};
use std::ops::{Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::table::Table;

/// How to address rows or columns along one axis.
///
/// - `Span` selects an ordered, contiguous sub-sequence `[start, end)`,
///   clamped to the axis bounds; `end == None` runs to the edge.
/// - `Indices` selects by explicit index list: result order follows the
///   requested order, out-of-bounds indices produce no entry (silently
///   dropped, never an error), and duplicate indices produce duplicate
///   entries. The result is therefore at most as long as the request.
///
/// The list shape exists so callers can arbitrarily permute or subset a
/// dimension, e.g. reordering columns by an externally computed index
/// order, without pre-validating every index at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSpec {
    Span { start: usize, end: Option<usize> },
    Indices(Vec<usize>),
}

impl AxisSpec {
    /// Converts any host range into a span, keeping the range type's own
    /// bound semantics.
    pub fn from_bounds<R: RangeBounds<usize>>(range: &R) -> AxisSpec {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        // An inclusive end at usize::MAX saturates to "run to the edge".
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        AxisSpec::Span { start, end }
    }

    /// Resolves the spec into concrete indices against an axis holding
    /// `len` entries.
    fn resolve(&self, len: usize) -> Vec<usize> {
        match self {
            AxisSpec::Span { start, end } => {
                let hi = end.unwrap_or(len).min(len);
                let lo = (*start).min(hi);
                (lo..hi).collect()
            }
            AxisSpec::Indices(indices) => {
                indices.iter().copied().filter(|&i| i < len).collect()
            }
        }
    }
}

impl From<usize> for AxisSpec {
    fn from(index: usize) -> Self {
        AxisSpec::Indices(vec![index])
    }
}

impl From<Vec<usize>> for AxisSpec {
    fn from(indices: Vec<usize>) -> Self {
        AxisSpec::Indices(indices)
    }
}

impl From<&[usize]> for AxisSpec {
    fn from(indices: &[usize]) -> Self {
        AxisSpec::Indices(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for AxisSpec {
    fn from(indices: [usize; N]) -> Self {
        AxisSpec::Indices(indices.into())
    }
}

impl From<Range<usize>> for AxisSpec {
    fn from(range: Range<usize>) -> Self {
        AxisSpec::from_bounds(&range)
    }
}

impl From<RangeInclusive<usize>> for AxisSpec {
    fn from(range: RangeInclusive<usize>) -> Self {
        AxisSpec::from_bounds(&range)
    }
}

impl From<RangeFrom<usize>> for AxisSpec {
    fn from(range: RangeFrom<usize>) -> Self {
        AxisSpec::from_bounds(&range)
    }
}

impl From<RangeTo<usize>> for AxisSpec {
    fn from(range: RangeTo<usize>) -> Self {
        AxisSpec::from_bounds(&range)
    }
}

impl From<RangeToInclusive<usize>> for AxisSpec {
    fn from(range: RangeToInclusive<usize>) -> Self {
        AxisSpec::from_bounds(&range)
    }
}

impl From<RangeFull> for AxisSpec {
    fn from(range: RangeFull) -> Self {
        AxisSpec::from_bounds(&range)
    }
}

// ============================================================================
// SELECTION OPERATIONS
// ============================================================================

impl<T> Table<T> {
    /// Point lookup. Out-of-bounds coordinates yield `None`; this never
    /// fails.
    pub fn at(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

impl<T: Clone> Table<T> {
    /// Selects whole rows according to `spec`.
    pub fn rows(&self, spec: impl Into<AxisSpec>) -> Table<T> {
        let picked = spec.into().resolve(self.rows.len());
        let rows = picked.into_iter().map(|i| self.rows[i].clone()).collect();
        Table::from_valid_rows(rows)
    }

    /// Selects columns according to `spec`, preserving row order.
    pub fn columns(&self, spec: impl Into<AxisSpec>) -> Table<T> {
        let picked = spec.into().resolve(self.x_dimension());
        let rows = self
            .rows
            .iter()
            .map(|row| picked.iter().map(|&c| row[c].clone()).collect())
            .collect();
        Table::from_valid_rows(rows)
    }

    /// Row selection composed with column selection.
    pub fn rows_columns(
        &self,
        row_spec: impl Into<AxisSpec>,
        col_spec: impl Into<AxisSpec>,
    ) -> Table<T> {
        self.rows(row_spec).columns(col_spec)
    }

    /// Intersects the table with both ranges, producing an ordered
    /// sub-table. The host range types' own bound semantics apply.
    pub fn slice<R1, R2>(&self, row_range: R1, col_range: R2) -> Table<T>
    where
        R1: RangeBounds<usize>,
        R2: RangeBounds<usize>,
    {
        self.rows(AxisSpec::from_bounds(&row_range))
            .columns(AxisSpec::from_bounds(&col_range))
    }
}
