//! Shape and size utilities.

use crate::Result;
use std::fmt;

/// Returns the number of elements described by the given extents.
///
/// The product over zero extents is 1: an empty shape describes a scalar. Any zero extent gives 0 regardless
/// of the other extents, and a product that does not fit in `usize` saturates at `usize::MAX`.
pub fn compute_size(shape: &[usize]) -> usize {
    if shape.contains(&0) {
        return 0;
    }
    shape.iter().fold(1usize, |size, &extent| size.saturating_mul(extent))
}

/// An ordered sequence of per-axis extents, most significant axis first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Total number of elements, see [`compute_size`].
    pub fn size(&self) -> usize {
        compute_size(&self.0)
    }

    /// Row-major strides: the last axis has stride 1, every other axis the product of the extents to its right.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.0.len()];
        for i in (0..self.0.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.0[i + 1];
        }
        strides
    }

    /// Maps a multi-index to its linear offset, see [`crate::index::linear_offset`].
    pub fn offset(&self, indices: &[usize]) -> Result<usize> {
        crate::index::linear_offset(&self.0, indices)
    }

    /// Enumerates every valid multi-index in row-major order.
    ///
    /// A scalar shape yields a single empty index, a shape with a zero extent yields nothing.
    pub fn indices(&self) -> Indices<'_> {
        Indices {
            dims: &self.0,
            current: vec![0; self.0.len()],
            is_done: self.0.contains(&0),
        }
    }
}

/// Row-major multi-index enumeration over a shape.
pub struct Indices<'a> {
    dims: &'a [usize],
    current: Vec<usize>,
    is_done: bool,
}

impl Iterator for Indices<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }

        let item = self.current.clone();

        if self.dims.is_empty() {
            self.is_done = true;
            return Some(item);
        }

        let mut axis = self.dims.len() - 1;
        loop {
            self.current[axis] += 1;
            if self.current[axis] < self.dims[axis] {
                break;
            }
            self.current[axis] = 0;
            if axis == 0 {
                self.is_done = true;
                break;
            }
            axis -= 1;
        }

        Some(item)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl std::ops::Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape(dims.to_vec())
    }
}

impl<const K: usize> From<[usize; K]> for Shape {
    fn from(dims: [usize; K]) -> Self {
        Shape(dims.to_vec())
    }
}
