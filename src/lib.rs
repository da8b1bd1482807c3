//! orthovec: generic fixed-dimension vectors and random orthogonal unit vectors
//!
//! This crate provides a `Vector<T>` over integer, floating-point and complex element types with
//! checked elementwise arithmetic, tolerance-based equality and normalization, plus
//! `find_pu_vector`, which draws a random unit vector perpendicular to a given one.

pub mod config;
pub mod core;
pub mod error;
pub mod ortho;
pub mod vector;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::ortho::*;
pub use crate::vector::{EPSILON, Vector};
