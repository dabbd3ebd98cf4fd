//! FILENAME: src/lib.rs
//! PURPOSE: Main library entry point for the table engine.
//! CONTEXT: A minimal tabular-data library built around `Table<T>`, a
//! dense, rectangular, in-memory table. Construction, shape derivation,
//! selection, traversal, and copy-based mutation live in their own modules;
//! higher layers (labeled frames, file loaders, charting) consume only the
//! interfaces re-exported here.

pub mod dims;
pub mod error;
pub mod mutate;
pub mod select;
pub mod table;
pub mod traverse;

// Re-export commonly used types at the crate root
pub use dims::Dimension;
pub use error::TableError;
pub use select::AxisSpec;
pub use table::{IntoRow, Table};
