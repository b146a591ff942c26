//! Seed files.
//!
//! A seed file describes tables to load at startup:
//!
//! ```toml
//! [[tables]]
//! name = "students"
//! columns = [
//!     { name = "name", type = "text" },
//!     { name = "age", type = "integer" },
//! ]
//! rows = [
//!     ["Alice", "20"],
//!     ["Bob", "22"],
//! ]
//! ```
//!
//! Tables are built through the ordinary engine operations, so every row
//! is parsed and checked exactly as `add_row` would for any other caller.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tabula_db::{ColumnDescriptor, Database};
use tracing::debug;

/// Parsed contents of a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    /// Tables to create, in file order.
    #[serde(default)]
    pub tables: Vec<SeedTable>,
}

/// One table in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTable {
    /// Table name.
    pub name: String,
    /// Schema, in column order.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    /// Row values as strings, in column order.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl SeedFile {
    /// Reads a seed file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid seed file {}", path.display()))
    }

    /// Parses seed file contents.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Creates and fills every table in `db`.
    pub fn load_into(&self, db: &mut Database) -> Result<()> {
        for seed in &self.tables {
            let table = db.create_table(&seed.name)?;
            for column in &seed.columns {
                table.add_column(column.name.clone(), column.data_type);
            }
            for (line, values) in seed.rows.iter().enumerate() {
                table.add_row(values).with_context(|| {
                    format!("table '{}', row {}", seed.name, line + 1)
                })?;
            }
            debug!(
                "Seeded table '{}' with {} columns and {} rows",
                seed.name,
                table.column_count(),
                table.row_count()
            );
        }
        Ok(())
    }
}
