//! Element capabilities, inner products and faer interop.

pub mod col;
pub mod element;
pub mod inner;
pub mod traits;

pub use traits::{Element, InnerProduct, NumericKind};
