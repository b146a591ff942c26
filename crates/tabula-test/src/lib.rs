//! # tabula-test
//!
//! Integration tests for Tabula.
//!
//! This crate contains:
//! - Scenario tests over the table engine and registry
//! - Property tests for the engine invariants
//! - Shared fixtures

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Test utilities and fixtures
pub mod utils;
