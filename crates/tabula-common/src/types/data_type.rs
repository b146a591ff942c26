//! Column value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The type of every cell in a column.
///
/// The set is closed: a cell is text, a 64-bit float, or a 64-bit signed
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// UTF-8 text.
    Text,
    /// 64-bit floating point.
    Real,
    /// 64-bit signed integer.
    Integer,
}

impl DataType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Real | DataType::Integer)
    }

    /// Returns the lowercase name of the type.
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Real => "real",
            DataType::Integer => "integer",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(DataType::Text),
            "real" | "double" => Ok(DataType::Real),
            "integer" | "int" => Ok(DataType::Integer),
            other => Err(format!("unknown data type '{}'", other)),
        }
    }
}
