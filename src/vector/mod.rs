//! Fixed-dimension numeric vector.
//!
//! [`Vector<T>`] owns a contiguous buffer of `T` whose length is the vector's dimension.
//! Binary operations require matching dimensions and report [`VecError::DimensionMismatch`]
//! otherwise; every operation except [`Vector::normalize`], [`Vector::resize`] and
//! [`Vector::read_from`] leaves its operands untouched and returns a fresh vector.
//!
//! Integral element types use the plain `+`, `-` and `*` operators, so `add`, `subtract`,
//! `mul_elementwise`, `scale`, `dot`, `norm_squared` and `normalize` panic on integer overflow
//! in debug builds and wrap in release builds. Callers pick an element type wide enough for
//! their values.

use crate::core::traits::{Element, NumericKind};
use crate::error::VecError;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod input;
pub mod ops;

/// Absolute per-element tolerance used by [`Vector::approx_eq`] and `==`.
pub const EPSILON: f64 = 1.0e-5;

/// A vector of fixed dimension over the element type `T`.
#[derive(Clone, Debug)]
pub struct Vector<T> {
    elems: Vec<T>,
}

impl<T> Vector<T> {
    /// Empty vector of dimension 0.
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    /// Number of elements.
    pub fn dim(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elems
    }

    /// Checked element access.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        let dimension = self.dim();
        self.elems
            .get(index)
            .ok_or(VecError::IndexOutOfRange { index, dimension })
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let dimension = self.dim();
        self.elems
            .get_mut(index)
            .ok_or(VecError::IndexOutOfRange { index, dimension })
    }
}

impl<T: Element> Vector<T> {
    /// Vector of `size` copies of `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self { elems: vec![value; size] }
    }

    /// Vector of `size` zeros.
    pub fn zeros(size: usize) -> Self {
        Self::filled(size, T::zero())
    }

    /// Vector of `size` elements drawn independently and uniformly from `[low, high]`.
    ///
    /// A fresh generator is seeded from a nondeterministic source on every call.
    pub fn random(size: usize, low: T, high: T) -> Result<Self, VecError> {
        let mut rng = StdRng::seed_from_u64(rand::random::<u64>());
        Self::random_with(&mut rng, size, low, high)
    }

    /// Like [`Vector::random`], drawing from a caller-supplied generator.
    ///
    /// Integral element types use a discrete uniform distribution, floating types a continuous
    /// one. Any other element category fails with [`VecError::UnsupportedType`] regardless of
    /// `size`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, size: usize, low: T, high: T) -> Result<Self, VecError> {
        if T::KIND == NumericKind::Complex {
            return Err(VecError::UnsupportedType(std::any::type_name::<T>()));
        }
        tracing::trace!(size, %low, %high, "drawing random vector");
        let elems = (0..size)
            .map(|_| T::sample_uniform(rng, low, high))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { elems })
    }

    /// Reset the dimension to `size`, keeping the leading elements and zero-filling new slots.
    pub fn resize(&mut self, size: usize) {
        self.elems.resize(size, T::zero());
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, VecError> {
        VecError::check_dims(self.dim(), other.dim())?;
        Ok(self.elems.iter().zip(&other.elems).map(|(&a, &b)| f(a, b)).collect())
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        self.elems.iter().map(|&a| f(a)).collect()
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> Result<Self, VecError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self, VecError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self, VecError> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Every element multiplied by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|a| a * scalar)
    }

    /// Every element divided by `scalar`.
    pub fn div_scalar(&self, scalar: T) -> Result<Self, VecError> {
        if scalar.is_zero() {
            return Err(VecError::DivideByZero);
        }
        Ok(self.map(|a| a / scalar))
    }

    /// Sum of elementwise products.
    pub fn dot(&self, other: &Self) -> Result<T, VecError> {
        VecError::check_dims(self.dim(), other.dim())?;
        Ok(self
            .elems
            .iter()
            .zip(&other.elems)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Computes `Σ self[i] · conj(other[i])` against a complex vector.
    pub fn inner_conj(&self, other: &Vector<Complex64>) -> Result<Complex64, VecError> {
        VecError::check_dims(self.dim(), other.dim())?;
        Ok(self
            .elems
            .iter()
            .zip(other.iter())
            .map(|(&a, b)| a.to_c64() * b.conj())
            .sum())
    }

    /// Tolerance equality: same dimension and every pair within [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }

    pub fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.dim() == other.dim()
            && self
                .elems
                .iter()
                .zip(&other.elems)
                .all(|(&a, &b)| a.distance(b) <= eps)
    }

    /// Principal square root of every element. Negative floats yield NaN.
    pub fn sqrt_elements(&self) -> Self {
        self.map(Element::sqrt)
    }

    /// Sum of squared elements.
    pub fn norm_squared(&self) -> T {
        self.elems.iter().fold(T::zero(), |acc, &a| acc + a * a)
    }

    /// Rescale in place to unit Euclidean length.
    ///
    /// Integral vectors truncate, and the sum of squares may overflow (see the module docs).
    pub fn normalize(&mut self) -> Result<(), VecError> {
        let length_squared = self.norm_squared();
        if length_squared.is_zero() {
            return Err(VecError::ZeroVectorNormalization);
        }
        let length = Element::sqrt(length_squared);
        tracing::trace!(%length, dim = self.dim(), "normalizing");
        for a in self.elems.iter_mut() {
            *a = *a / length;
        }
        Ok(())
    }

    /// Normalized copy of `self`.
    pub fn normalized(&self) -> Result<Self, VecError> {
        let mut v = self.clone();
        v.normalize()?;
        Ok(v)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}
