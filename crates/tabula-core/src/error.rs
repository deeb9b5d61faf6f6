//! Error types for tabula-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabula-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid range reference format
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Row number out of bounds
    #[error("Row {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Unrecognized error literal
    #[error("Invalid error literal: {0}")]
    InvalidErrorLiteral(String),

    /// Column number out of bounds
    #[error("Column {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),
}
