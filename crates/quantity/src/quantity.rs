//! The structured field container.

use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, Axis, Slice};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use field_common::AxisTag;

use crate::element::FieldElement;
use crate::error::{QuantityError, Result};
use crate::range::AxisRange;

/// A dimension-tagged, unit-tagged buffer with a known compute domain.
///
/// `origin` and `extent` locate the compute domain inside the (halo-padded)
/// buffer, one entry per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<T> {
    data: ArrayD<T>,
    dims: Vec<AxisTag>,
    units: String,
    origin: Vec<usize>,
    extent: Vec<usize>,
}

/// Serializable description of a quantity without its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityMetadata {
    pub dims: Vec<String>,
    pub units: String,
    pub shape: Vec<usize>,
    pub origin: Vec<usize>,
    pub extent: Vec<usize>,
    pub dtype: String,
}

impl<T: FieldElement> Quantity<T> {
    /// Wrap an existing buffer.
    ///
    /// Fails if the number of dims, origins or extents differs from the
    /// buffer rank, or if the compute domain does not fit the buffer.
    pub fn new(
        data: ArrayD<T>,
        dims: Vec<AxisTag>,
        units: impl Into<String>,
        origin: Vec<usize>,
        extent: Vec<usize>,
    ) -> Result<Self> {
        let ndim = data.ndim();
        for len in [dims.len(), origin.len(), extent.len()] {
            if len != ndim {
                return Err(QuantityError::rank_mismatch(ndim, len));
            }
        }

        for (axis, ((&o, &e), &len)) in origin.iter().zip(&extent).zip(data.shape()).enumerate() {
            if o + e > len {
                return Err(QuantityError::InvalidDomain {
                    axis,
                    origin: o,
                    extent: e,
                    len,
                });
            }
        }

        Ok(Self {
            data,
            dims,
            units: units.into(),
            origin,
            extent,
        })
    }

    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ArrayD<T> {
        &mut self.data
    }

    pub fn into_data(self) -> ArrayD<T> {
        self.data
    }

    pub fn dims(&self) -> &[AxisTag] {
        &self.dims
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn origin(&self) -> &[usize] {
        &self.origin
    }

    pub fn extent(&self) -> &[usize] {
        &self.extent
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Read-only view of the sub-region selected by `ranges`.
    pub fn region(&self, ranges: &[AxisRange]) -> Result<ArrayViewD<'_, T>> {
        let resolved = resolve_ranges(self.data.shape(), ranges)?;
        let mut view = self.data.view();
        for (axis, r) in resolved.into_iter().enumerate() {
            view.slice_axis_inplace(Axis(axis), Slice::from(r));
        }
        Ok(view)
    }

    /// Mutable view of the sub-region selected by `ranges`.
    pub fn region_mut(&mut self, ranges: &[AxisRange]) -> Result<ArrayViewMutD<'_, T>> {
        let resolved = resolve_ranges(self.data.shape(), ranges)?;
        let mut view = self.data.view_mut();
        for (axis, r) in resolved.into_iter().enumerate() {
            view.slice_axis_inplace(Axis(axis), Slice::from(r));
        }
        Ok(view)
    }

    /// View of the compute domain, halo excluded.
    pub fn compute_domain(&self) -> ArrayViewD<'_, T> {
        let mut view = self.data.view();
        for (axis, (&o, &e)) in self.origin.iter().zip(&self.extent).enumerate() {
            view.slice_axis_inplace(Axis(axis), Slice::from(o..o + e));
        }
        view
    }

    pub fn metadata(&self) -> QuantityMetadata {
        QuantityMetadata {
            dims: self.dims.iter().map(|d| d.name().to_string()).collect(),
            units: self.units.clone(),
            shape: self.data.shape().to_vec(),
            origin: self.origin.clone(),
            extent: self.extent.clone(),
            dtype: T::DTYPE.to_string(),
        }
    }
}

fn resolve_ranges(shape: &[usize], ranges: &[AxisRange]) -> Result<Vec<Range<usize>>> {
    if ranges.len() != shape.len() {
        return Err(QuantityError::rank_mismatch(shape.len(), ranges.len()));
    }

    shape
        .iter()
        .zip(ranges)
        .enumerate()
        .map(|(axis, (&len, range))| {
            range
                .resolve(len)
                .ok_or(QuantityError::RegionOutOfBounds {
                    axis,
                    range: *range,
                    len,
                })
        })
        .collect()
}
