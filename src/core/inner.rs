//! Inner product and Euclidean norm for floating-point vectors.
//!
//! The unit type `()` plays the role of the standard Euclidean inner-product space, so generic
//! code can be written against [`InnerProduct`] and handed `&()`. With the `rayon` feature the
//! reductions are split into fixed chunks on the global thread pool; otherwise they defer to
//! [`Vector::dot`] and [`Vector::norm_squared`].

use crate::core::traits::{Element, InnerProduct};
use crate::error::VecError;
use crate::vector::Vector;
use num_traits::Float;

/// Elements per rayon task.
#[cfg(feature = "rayon")]
const CHUNK: usize = 1024;

/// `Σ x[i]·y[i]` over fixed-size chunks, partial sums combined in chunk order.
///
/// Chunk boundaries and the final sum do not depend on how rayon schedules the tasks, so
/// the rounding is identical from run to run.
#[cfg(feature = "rayon")]
fn chunked_sum_products<T: Float + Send + Sync>(x: &[T], y: &[T]) -> T {
    use rayon::prelude::*;
    let partials: Vec<T> = x
        .par_chunks(CHUNK)
        .zip(y.par_chunks(CHUNK))
        .map(|(xc, yc)| xc.iter().zip(yc).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
        .collect();
    partials.into_iter().fold(T::zero(), |acc, v| acc + v)
}

impl<T: Element + Float + Send + Sync> InnerProduct<Vector<T>> for () {
    type Scalar = T;

    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vector<T>, y: &Vector<T>) -> Result<T, VecError> {
        #[cfg(feature = "rayon")]
        {
            VecError::check_dims(x.dim(), y.dim())?;
            Ok(chunked_sum_products(x.as_slice(), y.as_slice()))
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.dot(y)
        }
    }

    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vector<T>) -> T {
        #[cfg(feature = "rayon")]
        {
            Float::sqrt(chunked_sum_products(x.as_slice(), x.as_slice()))
        }
        #[cfg(not(feature = "rayon"))]
        {
            Float::sqrt(x.norm_squared())
        }
    }
}
