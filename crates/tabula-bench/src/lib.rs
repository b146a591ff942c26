//! Tabula Performance Benchmarks
//!
//! This crate contains benchmarks for the Tabula components:
//! - Table engine (column growth, row insertion, deep copy)
//! - Table registry (create/drop, whole-database copy)
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p tabula-bench
//! ```

pub mod utils;
