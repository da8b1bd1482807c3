//! Operator and conversion trait impls for [`Vector`].

use super::Vector;
use crate::core::traits::Element;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// Panics when `index >= dim()`; use [`Vector::at`] for a checked lookup.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Element> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

/// Tolerance-based, see [`Vector::approx_eq`].
impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

/// Elements in index order separated by single spaces.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elems: Vec<T>) -> Self {
        Self { elems }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(elems: &[T]) -> Self {
        Self { elems: elems.to_vec() }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { elems: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Vector::from(vec![1, 2, 3]).to_string(), "1 2 3");
        assert_eq!(Vector::from(vec![1.5, -2.0]).to_string(), "1.5 -2");
        assert_eq!(Vector::<i32>::new().to_string(), "");
        assert_eq!(Vector::from(vec![7]).to_string(), "7");
    }

    #[test]
    fn scalar_mul_operator() {
        let v = Vector::from(vec![1, -2, 3]);
        assert_eq!((&v * 3).as_slice(), &[3, -6, 9]);
        assert_eq!((v * 0).as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn index_and_index_mut() {
        let mut v = Vector::from(vec![1.0, 2.0]);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let v = Vector::from(vec![1, 2, 3]);
        let _ = v[5];
    }

    #[test]
    fn eq_is_tolerant() {
        assert_eq!(Vector::from(vec![1.0, 2.0]), Vector::from(vec![1.000001, 2.0]));
        assert_ne!(Vector::from(vec![1.0, 2.0]), Vector::from(vec![1.0]));
    }
}
