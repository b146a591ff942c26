//! Type definitions for Tabula.
//!
//! This module contains the core type definitions shared across crates.

mod data_type;
mod ids;

pub use data_type::DataType;
pub use ids::RowId;
