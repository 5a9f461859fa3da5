//! Compute-grid geometry as seen by a single tile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute-domain extents of a tile plus the halo width on x and y.
///
/// The vertical extent counts cell-centered levels; interface levels are one
/// more than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub halo: usize,
}

impl GridShape {
    pub fn new(nx: usize, ny: usize, nz: usize, halo: usize) -> Self {
        Self { nx, ny, nz, halo }
    }

    /// C12 tile used by the AI2 reference data.
    pub fn c12() -> Self {
        Self::new(12, 12, 79, 3)
    }

    /// C24 tile used by the GEOS reference data.
    pub fn c24() -> Self {
        Self::new(24, 24, 72, 3)
    }

    /// Look up a named preset ("c12", "c24"), case-insensitive.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "c12" | "c12_ai2" => Some(Self::c12()),
            "c24" | "c24_geos" => Some(Self::c24()),
            _ => None,
        }
    }

    /// Parse "nx,ny,nz,halo".
    pub fn from_csv(s: &str) -> Result<Self, GridShapeParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(GridShapeParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0usize; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse()
                .map_err(|_| GridShapeParseError::InvalidNumber(part.to_string()))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// Compute extent of logical axis 0, 1 or 2.
    pub fn extent(&self, axis: usize) -> Option<usize> {
        match axis {
            0 => Some(self.nx),
            1 => Some(self.ny),
            2 => Some(self.nz),
            _ => None,
        }
    }

    /// Number of grid points in the compute domain.
    pub fn compute_points(&self) -> usize {
        self.nx * self.ny * self.nz
    }
}

impl From<(usize, usize, usize, usize)> for GridShape {
    fn from((nx, ny, nz, halo): (usize, usize, usize, usize)) -> Self {
        Self::new(nx, ny, nz, halo)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) w/ halo={}", self.nx, self.ny, self.nz, self.halo)
    }
}

/// Error type for grid shape parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridShapeParseError {
    #[error("Invalid grid shape format: expected 'nx,ny,nz,halo', got '{0}'")]
    InvalidFormat(String),

    #[error("Invalid number in grid shape: '{0}'")]
    InvalidNumber(String),
}
