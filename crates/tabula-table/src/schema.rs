//! Column descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabula_common::DataType;

/// One entry of a table schema: a column name and its value type.
///
/// Names are not required to be unique; position disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Type of every cell in this column.
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl ColumnDescriptor {
    /// Creates a new column descriptor.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

impl<S: Into<String>> From<(S, DataType)> for ColumnDescriptor {
    fn from((name, data_type): (S, DataType)) -> Self {
        Self::new(name, data_type)
    }
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_display() {
        let col = ColumnDescriptor::new("gpa", DataType::Real);
        assert_eq!(col.to_string(), "gpa(real)");
        assert_eq!(col.name(), "gpa");
        assert_eq!(col.data_type(), DataType::Real);
    }

    #[test]
    fn test_descriptor_from_tuple() {
        let col: ColumnDescriptor = ("age", DataType::Integer).into();
        assert_eq!(col, ColumnDescriptor::new("age", DataType::Integer));
    }
}
