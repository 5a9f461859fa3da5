//! Element types a field can hold.

use num_traits::Zero;
use std::fmt::Debug;

/// Numeric element stored in a [`Quantity`](crate::Quantity).
///
/// Implemented for the dtypes found in the reference datasets.
pub trait FieldElement: Copy + Zero + PartialEq + Debug + Send + Sync + 'static {
    /// numpy-style dtype name, used in logs and metadata.
    const DTYPE: &'static str;
}

impl FieldElement for f32 {
    const DTYPE: &'static str = "float32";
}

impl FieldElement for f64 {
    const DTYPE: &'static str = "float64";
}

impl FieldElement for i32 {
    const DTYPE: &'static str = "int32";
}

impl FieldElement for i64 {
    const DTYPE: &'static str = "int64";
}
