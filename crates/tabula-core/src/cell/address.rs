//! Cell address type

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "$B$2")
///
/// Columns and rows are 1-based, matching how they are written in A1 notation.
/// Absolute markers (`$`) are accepted when parsing but not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Column number (A=1, B=2, ..., XFD=16384)
    pub col: u32,
    /// Row number (1-based)
    pub row: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tabula_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!((addr.col, addr.row), (1, 1));
    ///
    /// let addr = CellAddress::parse("$B$2").unwrap();
    /// assert_eq!((addr.col, addr.row), (2, 2));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let body = s.strip_prefix('$').unwrap_or(s);

        let letters_end = body
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(body.len());
        if letters_end == 0 {
            return Err(Error::InvalidAddress(format!("no column letters in '{}'", s)));
        }

        let col = Self::letters_to_column(&body[..letters_end])?;

        let rest = &body[letters_end..];
        let digits = rest.strip_prefix('$').unwrap_or(rest);
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row = Self::parse_row(digits)
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        Ok(Self { col, row })
    }

    /// Convert a column number to letters (1 = A, 26 = Z, 27 = AA, etc.)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to a column number (A = 1, Z = 26, AA = 27, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col
                .saturating_mul(26)
                .saturating_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        if col > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }

        Ok(col)
    }

    /// Parse a 1-based row number, checking sheet limits
    pub fn parse_row(digits: &str) -> Result<u32> {
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number '{}'", digits)))?;

        if row == 0 {
            return Err(Error::InvalidAddress("row number must be >= 1".into()));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(row)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(1), "A");
        assert_eq!(CellAddress::column_to_letters(26), "Z");
        assert_eq!(CellAddress::column_to_letters(27), "AA");
        assert_eq!(CellAddress::column_to_letters(702), "ZZ");
        assert_eq!(CellAddress::column_to_letters(703), "AAA");
        assert_eq!(CellAddress::column_to_letters(16384), "XFD");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_column("z").unwrap(), 26);
        assert_eq!(CellAddress::letters_to_column("AA").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_column("XFD").unwrap(), 16384);
        assert!(CellAddress::letters_to_column("XFE").is_err());
        assert!(CellAddress::letters_to_column("ZZZZZZZZ").is_err());
    }

    #[test]
    fn test_cell_address_parse() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(1, 1));
        assert_eq!(CellAddress::parse("$C$7").unwrap(), CellAddress::new(3, 7));
        assert_eq!(CellAddress::parse("b$2").unwrap(), CellAddress::new(2, 2));
        assert_eq!(
            CellAddress::parse("XFD1048576").unwrap(),
            CellAddress::new(16384, 1_048_576)
        );
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("A1048577").is_err());
        assert!(CellAddress::parse("A1B").is_err());
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(1, 1).to_string(), "A1");
        assert_eq!(CellAddress::new(3, 100).to_string(), "C100");
    }
}
