//! Per-dimension sizing for a single subtile.
//!
//! Every horizontal axis is allocated with room for the halo on both sides
//! and for the interface point, so centered and interface fields share one
//! buffer shape. The vertical axis has no halo but also gets the extra
//! interface level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use field_common::{AxisTag, GridShape};

use crate::error::{QuantityError, Result};

/// Sizes buffers for fields living on one subtile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtileGridSizer {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub n_halo: usize,
    /// Lengths of non-spatial dimensions, keyed by dimension name.
    #[serde(default)]
    pub extra_dim_lengths: BTreeMap<String, usize>,
}

impl SubtileGridSizer {
    pub fn new(nx: usize, ny: usize, nz: usize, n_halo: usize) -> Self {
        Self {
            nx,
            ny,
            nz,
            n_halo,
            extra_dim_lengths: BTreeMap::new(),
        }
    }

    pub fn from_grid_shape(grid: GridShape) -> Self {
        Self::new(grid.nx, grid.ny, grid.nz, grid.halo)
    }

    pub fn grid_shape(&self) -> GridShape {
        GridShape::new(self.nx, self.ny, self.nz, self.n_halo)
    }

    /// Register (or overwrite) the lengths of extra dimensions.
    pub fn set_extra_dim_lengths<I, S>(&mut self, lengths: I)
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        for (name, len) in lengths {
            self.extra_dim_lengths.insert(name.into(), len);
        }
    }

    pub fn extra_dim_length(&self, name: &str) -> Option<usize> {
        self.extra_dim_lengths.get(name).copied()
    }

    /// Number of compute-domain points along `dim`.
    pub fn dim_extent(&self, dim: &AxisTag) -> Result<usize> {
        match dim {
            AxisTag::X => Ok(self.nx),
            AxisTag::Y => Ok(self.ny),
            AxisTag::Z => Ok(self.nz),
            AxisTag::XInterface => Ok(self.nx + 1),
            AxisTag::YInterface => Ok(self.ny + 1),
            AxisTag::ZInterface => Ok(self.nz + 1),
            AxisTag::Extra(name) => self
                .extra_dim_length(name)
                .ok_or_else(|| QuantityError::UnknownDimension(name.clone())),
        }
    }

    /// Allocated length along `dim`.
    pub fn dim_shape(&self, dim: &AxisTag) -> Result<usize> {
        match dim {
            AxisTag::X | AxisTag::XInterface => Ok(self.nx + 1 + 2 * self.n_halo),
            AxisTag::Y | AxisTag::YInterface => Ok(self.ny + 1 + 2 * self.n_halo),
            AxisTag::Z | AxisTag::ZInterface => Ok(self.nz + 1),
            AxisTag::Extra(_) => self.dim_extent(dim),
        }
    }

    /// Index of the first compute-domain point along `dim`.
    pub fn dim_origin(&self, dim: &AxisTag) -> usize {
        if dim.is_horizontal() {
            self.n_halo
        } else {
            0
        }
    }

    pub fn get_extent(&self, dims: &[AxisTag]) -> Result<Vec<usize>> {
        dims.iter().map(|d| self.dim_extent(d)).collect()
    }

    pub fn get_shape(&self, dims: &[AxisTag]) -> Result<Vec<usize>> {
        dims.iter().map(|d| self.dim_shape(d)).collect()
    }

    pub fn get_origin(&self, dims: &[AxisTag]) -> Vec<usize> {
        dims.iter().map(|d| self.dim_origin(d)).collect()
    }
}

impl From<GridShape> for SubtileGridSizer {
    fn from(grid: GridShape) -> Self {
        Self::from_grid_shape(grid)
    }
}
