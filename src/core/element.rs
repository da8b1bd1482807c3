//! `Element` implementations for the primitive integer, float and complex types.

use crate::core::traits::{Element, NumericKind};
use crate::error::VecError;
use num_complex::{Complex, Complex64};
use rand::Rng;

macro_rules! impl_integral {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const KIND: NumericKind = NumericKind::Integral;

            fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Result<Self, VecError> {
                if low > high {
                    return Err(VecError::InvalidBounds);
                }
                Ok(rng.gen_range(low..=high))
            }

            fn sqrt(self) -> Self {
                // negative input yields NaN, which saturates to 0
                (self as f64).sqrt() as $t
            }

            fn distance(self, other: Self) -> f64 {
                // exact in the integer type; widening first would merge values above 2^53
                self.abs_diff(other) as f64
            }

            fn to_c64(self) -> Complex64 {
                Complex64::new(self as f64, 0.0)
            }
        }
    )*};
}

macro_rules! impl_floating {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const KIND: NumericKind = NumericKind::Floating;

            fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Result<Self, VecError> {
                // NaN or infinite bounds make the span non-finite
                if !(high - low).is_finite() || low > high {
                    return Err(VecError::InvalidBounds);
                }
                Ok(rng.gen_range(low..=high))
            }

            fn sqrt(self) -> Self {
                num_traits::Float::sqrt(self)
            }

            fn distance(self, other: Self) -> f64 {
                (self - other).abs() as f64
            }

            fn to_c64(self) -> Complex64 {
                Complex64::new(self as f64, 0.0)
            }
        }
    )*};
}

macro_rules! impl_complex {
    ($($t:ty),*) => {$(
        impl Element for Complex<$t> {
            const KIND: NumericKind = NumericKind::Complex;

            fn sample_uniform<R: Rng + ?Sized>(_rng: &mut R, _low: Self, _high: Self) -> Result<Self, VecError> {
                Err(VecError::UnsupportedType(std::any::type_name::<Self>()))
            }

            fn sqrt(self) -> Self {
                Complex::<$t>::sqrt(self)
            }

            fn distance(self, other: Self) -> f64 {
                (self - other).norm() as f64
            }

            fn to_c64(self) -> Complex64 {
                Complex64::new(self.re as f64, self.im as f64)
            }
        }
    )*};
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_floating!(f32, f64);
impl_complex!(f32, f64);
