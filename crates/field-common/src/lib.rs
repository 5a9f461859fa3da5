//! Common types shared across the field ingestion workspace.

pub mod dims;
pub mod grid;

pub use dims::{AxisTag, CENTERED_DIMS, HORIZONTAL_DIMS, INTERFACE_DIMS};
pub use grid::{GridShape, GridShapeParseError};
