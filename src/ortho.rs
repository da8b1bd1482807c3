//! Random unit vectors orthogonal to a given vector.
//!
//! A helper vector `b` is drawn at random, its component along the normalized input is
//! removed (one Gram-Schmidt step), and the remainder is normalized. The result is
//! orthogonal to the input up to rounding, but it is not deterministic unless the caller
//! fixes the generator.
//!
//! If `b` happens to be (nearly) parallel to the input the remainder collapses towards the
//! zero vector; when it is exactly zero the call fails with
//! [`VecError::ZeroVectorNormalization`]. One-dimensional inputs always land here. No retry
//! is attempted.

use crate::config::OrthoOptions;
use crate::core::traits::{Element, InnerProduct};
use crate::error::VecError;
use crate::vector::Vector;
use num_traits::Float;
use rand::Rng;

/// Unit vector orthogonal to `a`, drawn with a freshly seeded generator.
pub fn find_pu_vector<T>(a: &Vector<T>) -> Result<Vector<T>, VecError>
where
    T: Element + Float + Send + Sync,
{
    find_pu_vector_opts(a, &OrthoOptions::default())
}

/// [`find_pu_vector`] with the helper vector drawn from `rng` in `[-1, 1]`.
pub fn find_pu_vector_with<T, R>(a: &Vector<T>, rng: &mut R) -> Result<Vector<T>, VecError>
where
    T: Element + Float + Send + Sync,
    R: Rng + ?Sized,
{
    orthogonal_unit(a, -T::one(), T::one(), rng)
}

/// [`find_pu_vector`] with an explicit sampling range and optional seed.
pub fn find_pu_vector_opts<T>(a: &Vector<T>, opts: &OrthoOptions<T>) -> Result<Vector<T>, VecError>
where
    T: Element + Float + Send + Sync,
{
    let mut rng = opts.rng();
    orthogonal_unit(a, opts.low, opts.high, &mut rng)
}

fn orthogonal_unit<T, R>(a: &Vector<T>, low: T, high: T, rng: &mut R) -> Result<Vector<T>, VecError>
where
    T: Element + Float + Send + Sync,
    R: Rng + ?Sized,
{
    let ip = ();
    let a_norm = a.normalized()?;

    let b = Vector::random_with(rng, a.dim(), low, high)?;
    let c = ip.dot(&b, &a_norm)?;
    let project = a_norm.scale(c);

    let mut b_orth = b.subtract(&project)?;
    let rest = b_orth.norm_squared();
    if rest < T::epsilon() {
        tracing::warn!(dim = a.dim(), "helper vector nearly parallel to input");
    }
    b_orth.normalize()?;

    let residual = ip.dot(&b_orth, &a_norm)?;
    tracing::debug!(%residual, "orthogonal unit vector drawn");
    Ok(b_orth)
}
