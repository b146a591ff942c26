//! Name-keyed table registry.

use std::collections::BTreeMap;
use std::fmt;

use tabula_common::config::DatabaseConfig;
use tabula_common::{TabulaError, TabulaResult};
use tabula_table::Table;
use tracing::info;

/// A collection of named tables.
///
/// The registry owns every table outright. Cloning the registry deep-copies
/// every table; no storage is shared between a registry and its clone.
#[derive(Debug, Default, PartialEq)]
pub struct Database {
    /// Configuration applied to newly created tables.
    config: DatabaseConfig,
    /// Tables by name.
    tables: BTreeMap<String, Table>,
}

impl Database {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(config: DatabaseConfig) -> TabulaResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tables: BTreeMap::new(),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Creates an empty table and returns it for setup.
    pub fn create_table(&mut self, name: &str) -> TabulaResult<&mut Table> {
        if self.tables.contains_key(name) {
            return Err(TabulaError::DuplicateName {
                name: name.to_string(),
            });
        }

        info!("Creating table '{}'", name);
        let table = Table::with_config(&self.config.table);
        Ok(self.tables.entry(name.to_string()).or_insert(table))
    }

    /// Removes a table, handing ownership of it back to the caller.
    pub fn drop_table(&mut self, name: &str) -> TabulaResult<Table> {
        let table = self
            .tables
            .remove(name)
            .ok_or_else(|| TabulaError::NameNotFound {
                name: name.to_string(),
            })?;
        info!("Dropped table '{}' with {} rows", name, table.row_count());
        Ok(table)
    }

    /// Gets a table by name.
    pub fn get_table(&self, name: &str) -> TabulaResult<&Table> {
        self.tables.get(name).ok_or_else(|| TabulaError::NameNotFound {
            name: name.to_string(),
        })
    }

    /// Gets a table by name for mutation.
    pub fn get_table_mut(&mut self, name: &str) -> TabulaResult<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| TabulaError::NameNotFound {
                name: name.to_string(),
            })
    }

    /// Checks if a table exists.
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Lists all table names in sorted order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Iterates `(name, table)` pairs in name order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Returns the number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            tables: self.tables.clone(),
        }
    }

    /// Drops every table owned by `self`, then deep-copies `source`.
    fn clone_from(&mut self, source: &Self) {
        self.tables.clear();
        self.config.clone_from(&source.config);
        self.tables.extend(
            source
                .tables
                .iter()
                .map(|(name, table)| (name.clone(), table.clone())),
        );
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, table) in &self.tables {
            writeln!(f, "Table: {}", name)?;
            writeln!(f, "{}", table)?;
        }
        Ok(())
    }
}
