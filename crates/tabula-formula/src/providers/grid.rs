//! In-memory cell grid

use super::{CellValues, RangeProvider};
use crate::error::FormulaResult;
use crate::value::{Model, Value};
use std::collections::BTreeMap;
use tabula_core::{CellAddress, CellError, RangeSpec};

/// Range provider over a sparse map of cells
///
/// Cells are keyed by `(col, row)`, so iterating a range visits its stored
/// cells column by column. Empty cells are never yielded by
/// [`RangeProvider::values`]; a scalar read of an empty cell returns the blank
/// value (empty text unless changed with [`GridRanges::with_blank`]).
#[derive(Debug, Clone)]
pub struct GridRanges<M: Model<Range = RangeSpec>> {
    cells: BTreeMap<(u32, u32), Value<M>>,
    blank: Value<M>,
}

impl<M: Model<Range = RangeSpec>> GridRanges<M> {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
            blank: Value::Text(String::new()),
        }
    }

    /// Value read from an empty cell in a scalar context
    pub fn with_blank(mut self, blank: Value<M>) -> Self {
        self.blank = blank;
        self
    }

    /// Store a value, returning the previous one
    pub fn set(&mut self, col: u32, row: u32, value: Value<M>) -> Option<Value<M>> {
        self.cells.insert((col, row), value)
    }

    /// Store a value at an A1 address such as `B3`
    pub fn set_a1(&mut self, address: &str, value: Value<M>) -> tabula_core::Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set(addr.col, addr.row, value);
        Ok(())
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&Value<M>> {
        self.cells.get(&(col, row))
    }

    pub fn remove(&mut self, col: u32, row: u32) -> Option<Value<M>> {
        self.cells.remove(&(col, row))
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<M: Model<Range = RangeSpec>> Default for GridRanges<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model<Range = RangeSpec>> RangeProvider<M> for GridRanges<M> {
    fn parse_range(&self, text: &str) -> FormulaResult<RangeSpec> {
        Ok(RangeSpec::parse(text)?)
    }

    fn intersect(&self, a: &RangeSpec, b: &RangeSpec) -> RangeSpec {
        a.intersect(b)
    }

    fn implicit_intersect(&self, anchor: &RangeSpec, range: &RangeSpec) -> RangeSpec {
        range.implicit_intersect(anchor)
    }

    fn single(&self, range: &RangeSpec) -> Value<M> {
        if range.is_empty() {
            return Value::Error(CellError::Null);
        }
        if !range.is_single_value() {
            return Value::Error(CellError::Value);
        }
        self.get(range.col_lo, range.row_lo)
            .cloned()
            .unwrap_or_else(|| self.blank.clone())
    }

    fn values<'a>(&'a self, range: &RangeSpec) -> CellValues<'a, M> {
        let range = *range;
        if range.is_empty() {
            return Box::new(std::iter::empty());
        }
        // only the keys in the column span are visited
        let (first, last) = if range.has_columns() {
            ((range.col_lo, 0), (range.col_hi, u32::MAX))
        } else {
            ((0, 0), (u32::MAX, u32::MAX))
        };
        Box::new(
            self.cells
                .range(first..=last)
                .filter(move |((col, row), _)| range.contains(*col, *row))
                .map(|(_, value)| Ok(value.clone())),
        )
    }
}
