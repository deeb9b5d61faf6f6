//! Range algebra
//!
//! A [`RangeSpec`] is a rectangular selection of cells. Bounds are 1-based and
//! inclusive; a bound of `0` means the selection is unbounded in that
//! dimension, which is how whole-column (`A:A`) and whole-row (`1:5`)
//! references are represented.
//!
//! Intersection never normalizes its result: intersecting two disjoint
//! bounded ranges yields an inverted (empty) range, which is a valid value
//! that simply contains no cells.

use crate::cell::{CellAddress, CellError};
use crate::error::{Error, Result};
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

/// Intersect one dimension of two ranges
///
/// A lower bound of `0` marks the dimension as unbounded, in which case the
/// other side's bounds are taken unchanged.
pub fn intersect_dimension(a_lo: u32, a_hi: u32, b_lo: u32, b_hi: u32) -> (u32, u32) {
    if a_lo == 0 {
        (b_lo, b_hi)
    } else if b_lo == 0 {
        (a_lo, a_hi)
    } else {
        (a_lo.max(b_lo), a_hi.min(b_hi))
    }
}

/// A rectangular, possibly unbounded, selection of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSpec {
    pub col_lo: u32,
    pub col_hi: u32,
    pub row_lo: u32,
    pub row_hi: u32,
}

impl RangeSpec {
    /// Create a range from raw bounds
    pub fn new(col_lo: u32, col_hi: u32, row_lo: u32, row_hi: u32) -> Self {
        Self {
            col_lo,
            col_hi,
            row_lo,
            row_hi,
        }
    }

    /// A single cell
    pub fn cell(col: u32, row: u32) -> Self {
        Self::new(col, col, row, row)
    }

    /// Whole columns `lo..=hi`, unbounded in rows
    pub fn columns(lo: u32, hi: u32) -> Self {
        Self::new(lo, hi, 0, 0)
    }

    /// Whole rows `lo..=hi`, unbounded in columns
    pub fn rows(lo: u32, hi: u32) -> Self {
        Self::new(0, 0, lo, hi)
    }

    /// The selection of every cell; the identity of [`intersect`](Self::intersect)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parse an A1-style reference: `A1`, `$A$1`, `A1:B10`, `A:C` or `1:5`
    ///
    /// Absolute markers are dropped and each dimension is normalized so that
    /// `lo <= hi`. A bare `:` is the unbounded range.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == ":" {
            return Ok(Self::unbounded());
        }

        let Some((first, second)) = s.split_once(':') else {
            let addr = CellAddress::parse(s)?;
            return Ok(Self::cell(addr.col, addr.row));
        };

        let start = Self::parse_half(first, s)?;
        let end = Self::parse_half(second, s)?;

        let spec = match (start, end) {
            ((Some(c1), Some(r1)), (Some(c2), Some(r2))) => {
                Self::new(c1.min(c2), c1.max(c2), r1.min(r2), r1.max(r2))
            }
            ((Some(c1), None), (Some(c2), None)) => Self::columns(c1.min(c2), c1.max(c2)),
            ((None, Some(r1)), (None, Some(r2))) => Self::rows(r1.min(r2), r1.max(r2)),
            _ => {
                return Err(Error::InvalidRange(format!(
                    "mismatched range halves in '{}'",
                    s
                )))
            }
        };

        Ok(spec)
    }

    /// Parse one side of a `:` into its optional column and row
    fn parse_half(half: &str, whole: &str) -> Result<(Option<u32>, Option<u32>)> {
        let (_, letters, digits) = regex_captures!(r"^\$?([A-Za-z]*)\$?([0-9]*)$", half)
            .ok_or_else(|| Error::InvalidRange(format!("invalid reference '{}'", whole)))?;

        if letters.is_empty() && digits.is_empty() {
            return Err(Error::InvalidRange(format!("empty range half in '{}'", whole)));
        }

        let col = if letters.is_empty() {
            None
        } else {
            Some(CellAddress::letters_to_column(letters)?)
        };
        let row = if digits.is_empty() {
            None
        } else {
            Some(CellAddress::parse_row(digits)?)
        };

        Ok((col, row))
    }

    /// Whether the columns are bounded
    pub fn has_columns(&self) -> bool {
        self.col_lo != 0
    }

    /// Whether the rows are bounded
    pub fn has_rows(&self) -> bool {
        self.row_lo != 0
    }

    /// True iff both dimensions are bounded and the range is exactly one cell
    pub fn is_single_value(&self) -> bool {
        self.has_columns()
            && self.has_rows()
            && self.col_lo == self.col_hi
            && self.row_lo == self.row_hi
    }

    /// True if some bounded dimension is inverted, so the range holds no cells
    pub fn is_empty(&self) -> bool {
        (self.has_columns() && self.col_lo > self.col_hi)
            || (self.has_rows() && self.row_lo > self.row_hi)
    }

    /// Check if a cell lies within this range
    pub fn contains(&self, col: u32, row: u32) -> bool {
        fn within(lo: u32, hi: u32, x: u32) -> bool {
            lo == 0 || (lo <= x && x <= hi)
        }
        within(self.col_lo, self.col_hi, col) && within(self.row_lo, self.row_hi, row)
    }

    /// Intersect two ranges, dimension by dimension
    pub fn intersect(&self, other: &RangeSpec) -> RangeSpec {
        let (col_lo, col_hi) =
            intersect_dimension(self.col_lo, self.col_hi, other.col_lo, other.col_hi);
        let (row_lo, row_hi) =
            intersect_dimension(self.row_lo, self.row_hi, other.row_lo, other.row_hi);
        RangeSpec::new(col_lo, col_hi, row_lo, row_hi)
    }

    /// Reduce this range to the line(s) aligned with `anchor`
    ///
    /// A dimension that already spans exactly one bounded line is kept; any
    /// other dimension takes the anchor's line. When the anchor lies outside
    /// the range the result is empty.
    pub fn implicit_intersect(&self, anchor: &RangeSpec) -> RangeSpec {
        fn align(lo: u32, hi: u32, anchor_lo: u32, anchor_hi: u32) -> (u32, u32) {
            if lo != 0 && lo == hi {
                (lo, hi)
            } else {
                intersect_dimension(lo, hi, anchor_lo, anchor_hi)
            }
        }

        let (col_lo, col_hi) = align(self.col_lo, self.col_hi, anchor.col_lo, anchor.col_hi);
        let (row_lo, row_hi) = align(self.row_lo, self.row_hi, anchor.row_lo, anchor.row_hi);
        RangeSpec::new(col_lo, col_hi, row_lo, row_hi)
    }

    /// Iterate the cells of a bounded range, column by column
    ///
    /// Unbounded and empty ranges yield nothing.
    pub fn cells(&self) -> SpecCells {
        let exhausted = !self.has_columns() || !self.has_rows() || self.is_empty();
        SpecCells {
            spec: *self,
            col: self.col_lo,
            row: self.row_lo,
            exhausted,
        }
    }

    /// Format as an A1-style reference
    ///
    /// The unbounded range prints as `:`. An empty range has no reference
    /// and prints as `#NULL!`, which [`parse`](Self::parse) rejects.
    pub fn to_a1_string(&self) -> String {
        if self.is_empty() {
            return CellError::Null.as_str().to_string();
        }
        let letters = CellAddress::column_to_letters;
        match (self.has_columns(), self.has_rows()) {
            (true, true) if self.is_single_value() => {
                format!("{}{}", letters(self.col_lo), self.row_lo)
            }
            (true, true) => format!(
                "{}{}:{}{}",
                letters(self.col_lo),
                self.row_lo,
                letters(self.col_hi),
                self.row_hi
            ),
            (true, false) => format!("{}:{}", letters(self.col_lo), letters(self.col_hi)),
            (false, true) => format!("{}:{}", self.row_lo, self.row_hi),
            (false, false) => ":".to_string(),
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for RangeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over the cells of a [`RangeSpec`], column-major
#[derive(Debug, Clone)]
pub struct SpecCells {
    spec: RangeSpec,
    col: u32,
    row: u32,
    exhausted: bool,
}

impl Iterator for SpecCells {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let addr = CellAddress::new(self.col, self.row);

        if self.row < self.spec.row_hi {
            self.row += 1;
        } else if self.col < self.spec.col_hi {
            self.col += 1;
            self.row = self.spec.row_lo;
        } else {
            self.exhausted = true;
        }

        Some(addr)
    }
}
