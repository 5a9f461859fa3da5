//! Common test fixtures for field ingestion tests.
//!
//! Grid shapes mirror the tiles used by the benchmark drivers; the shape
//! helpers build raw-array shapes for each recognised axis layout.

use field_common::GridShape;

/// Grid shapes used across the test suite.
pub mod grids {
    use super::GridShape;

    /// C12 tile from the AI2 reference data.
    pub const C12: GridShape = GridShape {
        nx: 12,
        ny: 12,
        nz: 79,
        halo: 3,
    };

    /// C24 tile from the GEOS reference data.
    pub const C24: GridShape = GridShape {
        nx: 24,
        ny: 24,
        nz: 72,
        halo: 3,
    };

    /// Small non-square tile, keeps array sizes tiny.
    pub const TINY: GridShape = GridShape {
        nx: 4,
        ny: 5,
        nz: 3,
        halo: 2,
    };

    /// Tile without halo.
    pub const NO_HALO: GridShape = GridShape {
        nx: 6,
        ny: 6,
        nz: 4,
        halo: 0,
    };
}

/// Raw-array shapes for the four recognised layouts.
pub mod shapes {
    use super::GridShape;

    /// Compute-domain only, cell-centered: `(nx, ny, nz)`.
    pub fn compute(grid: GridShape) -> Vec<usize> {
        vec![grid.nx, grid.ny, grid.nz]
    }

    /// Cell-centered with halo on x and y: `(nx + 2h, ny + 2h, nz)`.
    pub fn halo_padded(grid: GridShape) -> Vec<usize> {
        vec![grid.nx + 2 * grid.halo, grid.ny + 2 * grid.halo, grid.nz]
    }

    /// Interface-located, no halo: `(nx + 1, ny + 1, nz + 1)`.
    pub fn interface(grid: GridShape) -> Vec<usize> {
        vec![grid.nx + 1, grid.ny + 1, grid.nz + 1]
    }

    /// Interface-located with halo: `(nx + 2h + 1, ny + 2h + 1, nz + 1)`.
    pub fn interface_halo_padded(grid: GridShape) -> Vec<usize> {
        vec![
            grid.nx + 2 * grid.halo + 1,
            grid.ny + 2 * grid.halo + 1,
            grid.nz + 1,
        ]
    }

    /// Append a trailing data dimension to a spatial shape.
    pub fn with_data_dim(mut shape: Vec<usize>, len: usize) -> Vec<usize> {
        shape.push(len);
        shape
    }
}
