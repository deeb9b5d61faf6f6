//! # tabula-core
//!
//! Core data structures for the tabula formula engine.
//!
//! This crate provides the value types the formula crate builds on:
//! - [`RangeSpec`] - Rectangular, possibly unbounded, cell selections and their intersection
//! - [`CellAddress`] - A1-style cell addressing
//! - [`CellError`] - Spreadsheet error values (`#REF!`, `#VALUE!`, ...)
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::RangeSpec;
//!
//! let column = RangeSpec::parse("B:B").unwrap();
//! let block = RangeSpec::parse("A2:C4").unwrap();
//!
//! assert_eq!(column.intersect(&block), RangeSpec::parse("B2:B4").unwrap());
//! ```

pub mod cell;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use cell::{CellAddress, CellError};
pub use error::{Error, Result};
pub use range::{intersect_dimension, RangeSpec, SpecCells};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;
