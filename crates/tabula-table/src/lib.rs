//! # tabula-table
//!
//! The single-table storage engine for Tabula.
//!
//! A [`Table`] owns an ordered schema of [`ColumnDescriptor`]s and a set of
//! [`Row`]s keyed by a never-reused [`RowId`]. Columns can be added and
//! removed while rows are present; every existing row is reshaped in place
//! so that cell `i` always holds a value of `columns[i]`'s type.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                            Table                             │
//! │  next_id ─ capacity ─ columns: [ColumnDescriptor]            │
//! │                                                              │
//! │  rows: BTreeMap<RowId, Row>                                  │
//! │    ┌───────┐   ┌──────────────────────────────────────────┐  │
//! │    │ RowId │──▶│ Cell │ Cell │ Cell │ (spare slots ...)    │  │
//! │    └───────┘   └──────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tabula_table::{DataType, Table};
//!
//! let mut table = Table::new();
//! table.add_column("name", DataType::Text);
//! table.add_column("age", DataType::Integer);
//!
//! let id = table.add_row(["Alice", "20"]).unwrap();
//! assert_eq!(id.as_u64(), 0);
//! assert_eq!(table.get_rows(), vec![vec!["Alice".to_string(), "20".to_string()]]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cell;
mod dump;
mod row;
mod schema;
mod table;

pub use cell::Cell;
pub use row::Row;
pub use schema::ColumnDescriptor;
pub use table::{Rows, Table};

pub use tabula_common::{DataType, RowId, TabulaError, TabulaResult};
