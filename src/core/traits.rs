//! Core numeric traits for orthovec.

use crate::error::VecError;
use num_complex::Complex64;
use num_traits::Num;
use rand::Rng;
use std::fmt::{Debug, Display};

/// Numeric category of an element type.
///
/// Random-range construction dispatches on this: integral types draw from a
/// discrete uniform distribution, floating types from a continuous one, and
/// every other category is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericKind {
    Integral,
    Floating,
    Complex,
}

/// A scalar that can live inside a [`Vector`](crate::vector::Vector).
pub trait Element: Copy + Num + Display + Debug {
    /// Category used to pick the sampling and square-root strategy.
    const KIND: NumericKind;

    /// Draw one value uniformly from the closed range `[low, high]`.
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Result<Self, VecError>;

    /// Principal square root. Integral types truncate toward zero.
    fn sqrt(self) -> Self;

    /// Absolute difference `|self - other|` as `f64`.
    fn distance(self, other: Self) -> f64;

    /// Widen to a double-precision complex number.
    fn to_c64(self) -> Complex64;
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar, VecError>;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}
