//! Error types for field allocation and assignment.

use thiserror::Error;

use crate::range::AxisRange;

/// Errors that can occur while sizing, slicing or filling a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// An extra dimension was used before its length was registered.
    #[error("unknown dimension '{0}': register its length before allocating")]
    UnknownDimension(String),

    /// Target region and source data disagree on shape.
    #[error("shape mismatch: target region {target:?} cannot hold data of shape {data:?}")]
    ShapeMismatch { target: Vec<usize>, data: Vec<usize> },

    /// Number of axes does not match.
    #[error("rank mismatch: expected {expected} axes, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// A range does not fit inside its axis.
    #[error("range {range} does not fit axis {axis} of length {len}")]
    RegionOutOfBounds {
        axis: usize,
        range: AxisRange,
        len: usize,
    },

    /// Compute domain lies outside the allocated buffer.
    #[error("invalid compute domain on axis {axis}: {origin} + {extent} exceeds length {len}")]
    InvalidDomain {
        axis: usize,
        origin: usize,
        extent: usize,
        len: usize,
    },
}

impl QuantityError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(target: &[usize], data: &[usize]) -> Self {
        Self::ShapeMismatch {
            target: target.to_vec(),
            data: data.to_vec(),
        }
    }

    /// Create a RankMismatch error.
    pub fn rank_mismatch(expected: usize, actual: usize) -> Self {
        Self::RankMismatch { expected, actual }
    }
}

/// Result type for quantity operations.
pub type Result<T> = std::result::Result<T, QuantityError>;
