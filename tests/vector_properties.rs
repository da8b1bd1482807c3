//! Algebraic properties of `Vector` checked over seeded random inputs.
//!
//! Each test draws a batch of vectors from a fixed-seed `StdRng` so failures are reproducible,
//! then verifies an identity elementwise within the crate's equality tolerance.

use approx::assert_abs_diff_eq;
use orthovec::{Vector, VecError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_pair(rng: &mut StdRng, n: usize) -> (Vector<f64>, Vector<f64>) {
    let x = Vector::random_with(rng, n, -100.0, 100.0).unwrap();
    let y = Vector::random_with(rng, n, -100.0, 100.0).unwrap();
    (x, y)
}

/// `(x + y) - y == x` for same-dimension vectors.
#[test]
fn add_then_subtract_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 0..20 {
        let (x, y) = random_pair(&mut rng, n);
        let back = x.add(&y).unwrap().subtract(&y).unwrap();
        assert_eq!(back, x);
    }
}

/// `(x * s) / s == x` for nonzero scalars.
#[test]
fn scale_then_divide_is_identity() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in 1..20 {
        let (x, _) = random_pair(&mut rng, n);
        let mut s: f64 = rng.gen_range(-10.0..10.0);
        if s.abs() < 1e-3 {
            s = 1.5;
        }
        let back = (&x * s).div_scalar(s).unwrap();
        assert_eq!(back, x);
    }
}

/// Normalizing any nonzero vector yields unit sum of squares.
#[test]
fn normalize_gives_unit_length() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..30 {
        let (mut x, _) = random_pair(&mut rng, n);
        x.normalize().unwrap();
        assert_abs_diff_eq!(x.norm_squared(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn integer_vectors_round_trip_exactly() {
    let mut rng = StdRng::seed_from_u64(4);
    let x = Vector::random_with(&mut rng, 16, -50i64, 50).unwrap();
    let y = Vector::random_with(&mut rng, 16, -50i64, 50).unwrap();
    assert_eq!(x.add(&y).unwrap().subtract(&y).unwrap().as_slice(), x.as_slice());
    assert_eq!((&x * 7).div_scalar(7).unwrap().as_slice(), x.as_slice());
}

#[test]
fn error_taxonomy() {
    let a = Vector::from(vec![1.0, 2.0, 3.0]);
    let b = Vector::from(vec![1.0, 2.0]);
    assert!(matches!(a.add(&b), Err(VecError::DimensionMismatch { .. })));
    assert!(matches!(a.subtract(&b), Err(VecError::DimensionMismatch { .. })));
    assert!(matches!(a.mul_elementwise(&b), Err(VecError::DimensionMismatch { .. })));
    assert!(matches!(a.at(5), Err(VecError::IndexOutOfRange { index: 5, dimension: 3 })));
    assert!(matches!(a.div_scalar(0.0), Err(VecError::DivideByZero)));
    let mut z: Vector<f64> = Vector::zeros(4);
    assert!(matches!(z.normalize(), Err(VecError::ZeroVectorNormalization)));
}

#[test]
fn error_messages_are_descriptive() {
    let a = Vector::from(vec![1, 2, 3]);
    let err = a.at(5).unwrap_err();
    assert_eq!(err.to_string(), "index 5 out of range for dimension 3");
    let err = a.add(&Vector::from(vec![1])).unwrap_err();
    assert_eq!(err.to_string(), "vectors must have the same dimension (3 != 1)");
}

#[test]
fn prints_space_separated() {
    assert_eq!(Vector::from(vec![1, 2, 3]).to_string(), "1 2 3");
}
