//! Implicit intersection of multi-cell ranges used as scalars

use super::{CellValues, RangeProvider};
use crate::error::FormulaResult;
use crate::value::{Model, RangeShape, Value};

/// Range provider decorator anchored at the formula's own cell
///
/// A multi-cell range read in a scalar context resolves to the cell aligned
/// with the anchor, so `=A1:A10` entered in `C5` reads `A5`. Every other
/// operation is passed straight through to the wrapped provider.
pub struct ImplicitIntersection<'a, M: Model> {
    inner: &'a dyn RangeProvider<M>,
    anchor: M::Range,
}

impl<'a, M: Model> ImplicitIntersection<'a, M> {
    pub fn new(inner: &'a dyn RangeProvider<M>, anchor: M::Range) -> Self {
        Self { inner, anchor }
    }

    /// The cell hosting the formula
    pub fn anchor(&self) -> &M::Range {
        &self.anchor
    }
}

impl<M: Model> RangeProvider<M> for ImplicitIntersection<'_, M> {
    fn parse_range(&self, text: &str) -> FormulaResult<M::Range> {
        self.inner.parse_range(text)
    }

    fn intersect(&self, a: &M::Range, b: &M::Range) -> M::Range {
        self.inner.intersect(a, b)
    }

    fn implicit_intersect(&self, anchor: &M::Range, range: &M::Range) -> M::Range {
        self.inner.implicit_intersect(anchor, range)
    }

    fn single(&self, range: &M::Range) -> Value<M> {
        if range.is_single_value() {
            self.inner.single(range)
        } else {
            let aligned = self.inner.implicit_intersect(&self.anchor, range);
            tracing::trace!(?range, ?aligned, "implicit intersection");
            self.inner.single(&aligned)
        }
    }

    fn values<'b>(&'b self, range: &M::Range) -> CellValues<'b, M> {
        self.inner.values(range)
    }
}
