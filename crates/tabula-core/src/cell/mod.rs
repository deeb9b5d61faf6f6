//! Cell addressing and cell-level error values

mod address;
mod error;

pub use address::CellAddress;
pub use error::CellError;
