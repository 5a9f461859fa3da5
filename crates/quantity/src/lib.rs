//! Structured Field Containers
//!
//! This crate provides the halo-aware, dimension-tagged containers that
//! benchmark inputs are moved into before being handed to the stencil code.
//! It covers:
//!
//! - **Sizing**: how many points each labelled axis gets once halos and the
//!   interface level are accounted for
//! - **Allocation**: a factory that turns a list of axis labels into a
//!   zero-filled buffer of the right shape
//! - **Guarded writes**: copying data into a sub-region only when the shapes
//!   agree exactly
//!
//! # Architecture
//!
//! ```text
//! dims = [x, y, z]
//!      │
//!      ▼
//! QuantityFactory::create_empty(dims, units)
//!      │
//!      ├─► SubtileGridSizer::get_shape    (nx+1+2h, ny+1+2h, nz+1)
//!      ├─► SubtileGridSizer::get_origin   (h, h, 0)
//!      └─► SubtileGridSizer::get_extent   (nx, ny, nz)
//!               │
//!               ▼
//!          Quantity<T>
//!               │
//!               ▼
//!          region_mut(ranges) ─► safe_assign_array(region, raw)
//! ```
//!
//! # Example
//!
//! ```
//! use field_common::{AxisTag, GridShape};
//! use quantity::{AxisRange, FieldFactory, QuantityFactory};
//!
//! let factory = QuantityFactory::from_grid_shape(GridShape::new(4, 4, 2, 1));
//! let qty = factory
//!     .create_empty::<f32>(&[AxisTag::X, AxisTag::Y, AxisTag::Z], "K")
//!     .unwrap();
//! assert_eq!(qty.shape(), &[7, 7, 3]);
//!
//! let region = qty
//!     .region(&[AxisRange::new(1, 2), AxisRange::new(1, 2), AxisRange::drop_last()])
//!     .unwrap();
//! assert_eq!(region.shape(), &[4, 4, 2]);
//! ```

pub mod buffer;
pub mod element;
pub mod error;
pub mod factory;
pub mod quantity;
pub mod range;
pub mod sizer;

// Re-export commonly used types at crate root
pub use buffer::safe_assign_array;
pub use element::FieldElement;
pub use error::{QuantityError, Result};
pub use factory::{FieldFactory, QuantityFactory};
pub use quantity::{Quantity, QuantityMetadata};
pub use range::AxisRange;
pub use sizer::SubtileGridSizer;
