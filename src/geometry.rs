//! Geometric utility objects.

use crate::num::McFloat;
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Denotes the x- or y-dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dim2 {
    X = 0,
    Y = 1,
}

impl fmt::Display for Dim2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::X => "x",
                Self::Y => "y",
            }
        )
    }
}

use Dim2::{X, Y};

/// Represents any quantity with two dimensional components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct In2D<T>([T; 2]);

impl<T> In2D<T> {
    /// Creates a new 2D quantity given the two components.
    pub fn new(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T> Index<Dim2> for In2D<T> {
    type Output = T;
    fn index(&self, dim: Dim2) -> &Self::Output {
        &self.0[dim as usize]
    }
}

impl<T> IndexMut<Dim2> for In2D<T> {
    fn index_mut(&mut self, dim: Dim2) -> &mut Self::Output {
        &mut self.0[dim as usize]
    }
}

/// A 2D spatial point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2<F>(In2D<F>);

impl<F: McFloat> Point2<F> {
    /// Creates a new 2D point given the two components.
    pub fn new(x: F, y: F) -> Self {
        Self(In2D::new(x, y))
    }

    /// Creates a new tuple containing copies of the two components.
    pub fn to_tuple(&self) -> (F, F) {
        (self[X], self[Y])
    }
}

impl<F: McFloat> Index<Dim2> for Point2<F> {
    type Output = F;
    fn index(&self, dim: Dim2) -> &Self::Output {
        &self.0[dim]
    }
}

impl<F: McFloat> IndexMut<Dim2> for Point2<F> {
    fn index_mut(&mut self, dim: Dim2) -> &mut Self::Output {
        &mut self.0[dim]
    }
}

impl<F: McFloat + fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self[X], self[Y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_indexing_works() {
        let mut point = Point2::new(-2.5, 0.75);
        assert_eq!(point[X], -2.5);
        assert_eq!(point[Y], 0.75);
        point[Y] = -1.0;
        assert_eq!(point.to_tuple(), (-2.5, -1.0));
    }
}
