//! Test data generators for creating synthetic raw arrays.
//!
//! These generators create predictable, verifiable patterns so tests can
//! check that data landed in exactly the right place after ingestion.

use ndarray::{ArrayD, Dimension, IxDyn};
use num_traits::{NumCast, Zero};

/// Creates an array filled with 0, 1, 2, ... in row-major order.
///
/// # Example
///
/// ```
/// use test_utils::sequential_array;
///
/// let a = sequential_array::<i32>(&[2, 3]);
/// assert_eq!(a[[0, 0]], 0);
/// assert_eq!(a[[1, 2]], 5);
/// ```
pub fn sequential_array<T>(shape: &[usize]) -> ArrayD<T>
where
    T: NumCast + Zero + Clone,
{
    let total: usize = shape.iter().product();
    let values: Vec<T> = (0..total)
        .map(|i| num_traits::cast(i).unwrap_or_else(T::zero))
        .collect();
    ArrayD::from_shape_vec(IxDyn(shape), values).expect("shape and length always agree")
}

/// Creates an array whose values encode their own index.
///
/// Each index component is weighted by a power of 100, so `[i, j, k]`
/// holds `i * 10000 + j * 100 + k + 1`. The `+ 1` keeps every value
/// distinct from the zero fill of a freshly allocated field. Axis lengths
/// must stay below 100 for the encoding to be unambiguous.
///
/// # Example
///
/// ```
/// use test_utils::coded_array;
///
/// let a = coded_array::<f64>(&[3, 4, 5]);
/// assert_eq!(a[[0, 0, 0]], 1.0);
/// assert_eq!(a[[2, 1, 4]], 20105.0);
/// ```
pub fn coded_array<T>(shape: &[usize]) -> ArrayD<T>
where
    T: NumCast + Zero + Clone,
{
    ArrayD::from_shape_fn(IxDyn(shape), |idx| {
        let code = idx
            .slice()
            .iter()
            .fold(0usize, |acc, &i| acc * 100 + i)
            + 1;
        num_traits::cast(code).unwrap_or_else(T::zero)
    })
}

/// Creates an array where every element has the same value.
pub fn constant_array<T: Clone>(shape: &[usize], value: T) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(shape), value)
}

/// Creates a 0-dimensional array holding a single value.
pub fn scalar_array<T: Clone>(value: T) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(&[]), value)
}
