//! Configuration for Tabula.
//!
//! This module provides configuration structures for tables and the
//! table registry.

mod database;

pub use database::{DatabaseConfig, TableConfig};
