//! # tabula-db
//!
//! The table registry and export collaborators for Tabula.
//!
//! A [`Database`] maps table names to owned [`Table`]s. It adds name
//! resolution and existence checks on top of the storage engine and nothing
//! else; every structural operation is performed on the table itself.
//!
//! # Example
//!
//! ```rust
//! use tabula_db::{DataType, Database};
//!
//! let mut db = Database::new();
//! let students = db.create_table("students").unwrap();
//! students.add_column("name", DataType::Text);
//! students.add_row(["Alice"]).unwrap();
//!
//! let snapshot = db.clone();
//! db.drop_table("students").unwrap();
//! assert!(snapshot.table_exists("students"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod database;
pub mod export;

pub use database::Database;
pub use export::{export_table_to_csv, write_csv};

pub use tabula_common::config::DatabaseConfig;
pub use tabula_common::{DataType, RowId, TabulaError, TabulaResult};
pub use tabula_table::{Cell, ColumnDescriptor, Row, Table};
