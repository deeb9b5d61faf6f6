//! Prelude module - common imports for tabula users
//!
//! ```rust
//! use tabula::prelude::*;
//! ```

pub use crate::{
    // Calculation
    calculate,
    Calculation,
    CalculationOptions,

    // Core types
    CellAddress,
    CellError,
    RangeSpec,

    // Parsing and evaluation
    evaluate,
    parse,
    Context,
    Expr,
    FormulaError,
    FormulaResult,
    FunctionRegistry,
    LiteralFallback,
    ParseOptions,
    Value,

    // Providers
    DecimalGrid,
    DecimalNumbers,
    FloatGrid,
    FloatNumbers,
    GridRanges,
    ImplicitIntersection,
    Model,
    NumberProvider,
    RangeProvider,

    Decimal,
};
