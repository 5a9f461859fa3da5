//! Factory for allocating quantities on a subtile.
//!
//! The `FieldFactory` trait is the seam consumers program against; the
//! `QuantityFactory` implementation sizes buffers with a
//! [`SubtileGridSizer`].
//!
//! # Example
//!
//! ```rust
//! use field_common::{AxisTag, GridShape};
//! use quantity::{FieldFactory, QuantityFactory};
//!
//! let mut factory = QuantityFactory::from_grid_shape(GridShape::c12());
//! factory.register_extra_dimension("ntracers", 4);
//!
//! let qty = factory
//!     .create_empty::<f64>(&[AxisTag::X, AxisTag::extra("ntracers")], "kg/kg")
//!     .unwrap();
//! assert_eq!(qty.shape(), &[19, 4]);
//! ```

use ndarray::{ArrayD, IxDyn};
use tracing::trace;

use field_common::{AxisTag, GridShape};

use crate::element::FieldElement;
use crate::error::Result;
use crate::quantity::Quantity;
use crate::sizer::SubtileGridSizer;

/// Capability to allocate empty, correctly sized quantities.
pub trait FieldFactory {
    /// Allocate a zero-filled quantity with the given axis labels.
    fn create_empty<T: FieldElement>(&self, dims: &[AxisTag], units: &str) -> Result<Quantity<T>>;

    /// Make an extra dimension known to subsequent allocations.
    fn register_extra_dimension(&mut self, name: &str, length: usize);
}

/// Factory backed by a subtile sizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityFactory {
    sizer: SubtileGridSizer,
}

impl QuantityFactory {
    pub fn new(sizer: SubtileGridSizer) -> Self {
        Self { sizer }
    }

    pub fn from_grid_shape(grid: GridShape) -> Self {
        Self::new(SubtileGridSizer::from_grid_shape(grid))
    }

    pub fn sizer(&self) -> &SubtileGridSizer {
        &self.sizer
    }

    /// Register several extra dimension lengths at once.
    pub fn set_extra_dim_lengths<I, S>(&mut self, lengths: I)
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        self.sizer.set_extra_dim_lengths(lengths);
    }

    /// Allocate a zero-filled quantity.
    pub fn zeros<T: FieldElement>(&self, dims: &[AxisTag], units: &str) -> Result<Quantity<T>> {
        let shape = self.sizer.get_shape(dims)?;
        let extent = self.sizer.get_extent(dims)?;
        let origin = self.sizer.get_origin(dims);

        trace!(
            dims = ?dims.iter().map(AxisTag::name).collect::<Vec<_>>(),
            shape = ?shape,
            dtype = T::DTYPE,
            "Allocating quantity"
        );

        let data = ArrayD::zeros(IxDyn(&shape));
        Quantity::new(data, dims.to_vec(), units, origin, extent)
    }
}

impl FieldFactory for QuantityFactory {
    fn create_empty<T: FieldElement>(&self, dims: &[AxisTag], units: &str) -> Result<Quantity<T>> {
        self.zeros(dims, units)
    }

    fn register_extra_dimension(&mut self, name: &str, length: usize) {
        self.sizer.set_extra_dim_lengths([(name, length)]);
    }
}
