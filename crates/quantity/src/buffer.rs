//! Shape-checked bulk copies.

use ndarray::{ArrayViewD, ArrayViewMutD};

use crate::error::{QuantityError, Result};

/// Copy `src` into `dst` element-wise.
///
/// Shapes must be identical: no broadcasting, no truncation. On mismatch
/// nothing is written.
pub fn safe_assign_array<T: Clone>(
    mut dst: ArrayViewMutD<'_, T>,
    src: &ArrayViewD<'_, T>,
) -> Result<()> {
    if dst.shape() != src.shape() {
        return Err(QuantityError::shape_mismatch(dst.shape(), src.shape()));
    }
    dst.assign(src);
    Ok(())
}
