//! Shared test utilities for the field ingestion workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Deterministic array generators with verifiable contents
//! - Grid fixtures matching the reference benchmark tiles
//! - Raw-shape helpers for every recognised axis layout
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{coded_array, grids};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
