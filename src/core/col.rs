//! Conversions between [`Vector`] and faer column vectors.

use crate::core::traits::Element;
use crate::vector::Vector;
use faer::Col;

impl<T: Element> From<&Vector<T>> for Col<T> {
    fn from(v: &Vector<T>) -> Self {
        let elems = v.as_slice();
        Col::from_fn(elems.len(), |i| elems[i])
    }
}

impl<T: Element> From<&Col<T>> for Vector<T> {
    fn from(c: &Col<T>) -> Self {
        (0..c.nrows()).map(|i| c[i]).collect()
    }
}
