//! Typed cell values.
//!
//! A `Cell` is the value stored in one slot of a row. Its variant always
//! matches the declared type of the column at that slot.

use std::fmt;

use tabula_common::DataType;

/// A single stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text value.
    Text(String),
    /// 64-bit floating point value.
    Real(f64),
    /// 64-bit signed integer value.
    Integer(i64),
}

impl Cell {
    /// Returns the zero value for a type.
    ///
    /// Existing rows receive this value when a column is appended.
    pub fn zero(data_type: DataType) -> Self {
        match data_type {
            DataType::Text => Cell::Text(String::new()),
            DataType::Real => Cell::Real(0.0),
            DataType::Integer => Cell::Integer(0),
        }
    }

    /// Parses user input as a value of the given type.
    ///
    /// Text is stored verbatim. Numeric input may carry surrounding
    /// whitespace but must otherwise be a complete number.
    pub fn parse(data_type: DataType, input: &str) -> Result<Self, String> {
        match data_type {
            DataType::Text => Ok(Cell::Text(input.to_string())),
            DataType::Real => input
                .trim()
                .parse::<f64>()
                .map(Cell::Real)
                .map_err(|e| e.to_string()),
            DataType::Integer => input
                .trim()
                .parse::<i64>()
                .map(Cell::Integer)
                .map_err(|e| e.to_string()),
        }
    }

    /// Returns the data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Cell::Text(_) => DataType::Text,
            Cell::Real(_) => DataType::Real,
            Cell::Integer(_) => DataType::Integer,
        }
    }

    /// Returns the text if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the float if this is a real cell.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Cell::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer cell.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// Text renders verbatim, numbers in their shortest round-trip decimal form.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Real(v) => write!(f, "{}", v),
            Cell::Integer(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Real(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Integer(v)
    }
}
