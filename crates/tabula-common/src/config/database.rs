//! Table and database configuration structures.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROW_CAPACITY;
use crate::error::{TabulaError, TabulaResult};

/// Main database configuration.
///
/// # Example
///
/// ```rust
/// use tabula_common::config::DatabaseConfig;
///
/// let config = DatabaseConfig::default();
/// assert_eq!(config.table.initial_capacity, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Configuration applied to every table the registry creates.
    #[serde(default)]
    pub table: TableConfig,
}

impl DatabaseConfig {
    /// Creates a configuration whose tables start with the given slot width.
    #[must_use]
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            table: TableConfig { initial_capacity },
        }
    }

    /// Creates a minimal configuration for testing.
    ///
    /// A width of one forces a capacity doubling on the second column.
    #[must_use]
    pub fn for_testing() -> Self {
        Self::with_initial_capacity(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TabulaResult<()> {
        self.table.validate()
    }
}

/// Per-table storage configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of cell slots each row starts with.
    /// Default: 2
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    DEFAULT_ROW_CAPACITY
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl TableConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> TabulaResult<()> {
        if self.initial_capacity == 0 {
            return Err(TabulaError::invalid_config(
                "table.initial_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.table.initial_capacity, DEFAULT_ROW_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = DatabaseConfig::with_initial_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(TabulaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_parse_toml() {
        let config: DatabaseConfig = toml::from_str(
            r#"
            [table]
            initial_capacity = 8
        "#,
        )
        .unwrap();
        assert_eq!(config.table.initial_capacity, 8);

        let empty: DatabaseConfig = toml::from_str("").unwrap();
        assert_eq!(empty, DatabaseConfig::default());
    }
}
