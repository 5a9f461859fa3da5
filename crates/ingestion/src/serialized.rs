//! Unwrapping of records captured by the Fortran serializer.
//!
//! Every serialized variable carries two leading record axes (savepoint,
//! rank). Only the first entry of each is used: a 2-D record holds a
//! scalar, anything larger holds the actual field.

use ndarray::{ArrayD, Axis};

use crate::error::{IngestionError, Result};

/// Number of leading record axes in a serialized variable.
pub const RECORD_AXES: usize = 2;

/// Take element `[0, 0, ...]` of a serialized record.
///
/// A 2-D record yields a 0-dimensional array.
pub fn unwrap_record<T>(data: ArrayD<T>) -> Result<ArrayD<T>> {
    if data.ndim() < RECORD_AXES {
        return Err(IngestionError::Serialized(format!(
            "expected at least {} record axes, got shape {:?}",
            RECORD_AXES,
            data.shape()
        )));
    }

    if data.shape()[..RECORD_AXES].contains(&0) {
        return Err(IngestionError::Serialized(format!(
            "empty record axis in shape {:?}",
            data.shape()
        )));
    }

    Ok(data.index_axis_move(Axis(0), 0).index_axis_move(Axis(0), 0))
}
