//! # tabula-common
//!
//! Common types, errors, and configuration for Tabula.
//!
//! This crate provides the foundational pieces shared by every Tabula
//! component:
//!
//! - **Types**: Row identifiers (`RowId`) and column value types (`DataType`)
//! - **Errors**: Unified error handling with `TabulaError`
//! - **Config**: Table and database configuration structures
//! - **Constants**: Defaults and limits
//!
//! ## Example
//!
//! ```rust
//! use tabula_common::types::{DataType, RowId};
//! use tabula_common::error::{TabulaError, TabulaResult};
//!
//! fn lookup(id: RowId) -> TabulaResult<()> {
//!     Err(TabulaError::RowNotFound { id })
//! }
//!
//! assert!(lookup(RowId::new(7)).is_err());
//! assert_eq!(DataType::Integer.to_string(), "integer");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use constants::*;
pub use error::{ErrorCode, TabulaError, TabulaResult};
pub use types::{DataType, RowId};
