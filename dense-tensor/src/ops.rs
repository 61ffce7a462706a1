//! Operations deriving new tensors from existing ones.
//!
//! Both operations only rely on the public tensor contract and always allocate a fresh result, so
//! their inputs are never modified or aliased.

use crate::{Result, Shape, Tensor, TensorError};
use std::ops::AddAssign;

/// Transposes the trailing two axes of a tensor.
///
/// - rank 0 or 1: returns an identical copy;
/// - rank 2: regular matrix transpose, `result[j, i] == source[i, j]`;
/// - rank 3 and above: every leading index combination is held fixed while its trailing matrix is transposed,
///   so `result[.., j, i] == source[.., i, j]`.
///
/// The result is always fully materialized in row-major order, never a view.
pub fn transpose<T: Clone>(source: &Tensor<T>) -> Result<Tensor<T>> {
    let rank = source.rank();
    if rank < 2 {
        return Ok(source.clone());
    }

    let dims = source.shape();
    let (rows, cols) = (dims[rank - 2], dims[rank - 1]);
    let leading = Shape::from(&dims[..rank - 2]);

    let mut new_shape = leading.to_vec();
    new_shape.extend([cols, rows]);

    log::trace!("transpose {:?} -> {:?}", dims, new_shape);

    let mut data = Vec::with_capacity(source.size());
    let mut index = vec![0; rank];

    for lead in leading.indices() {
        index[..rank - 2].copy_from_slice(&lead);
        for j in 0..cols {
            for i in 0..rows {
                index[rank - 2] = i;
                index[rank - 1] = j;
                data.push(source.get(&index)?.clone());
            }
        }
    }

    Tensor::new(data, &new_shape)
}

/// Adds two tensors element by element, pairing elements by linear offset.
///
/// Only the total element counts have to agree: the shapes may differ, in which case the result takes the shape
/// of `a`. No broadcasting is performed.
pub fn add<T>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>
where
    T: Clone + AddAssign<T>,
{
    if a.size() != b.size() {
        log::debug!("cannot add tensors of sizes {} and {}", a.size(), b.size());
        return Err(TensorError::SizeMismatch {
            expected: a.size(),
            actual: b.size(),
        });
    }

    log::trace!("add {:?} + {:?}", a.shape(), b.shape());

    let mut result = a.clone();
    for k in 0..b.size() {
        result[k] += b[k].clone();
    }

    Ok(result)
}

impl<T: Clone> Tensor<T> {
    /// Returns a new tensor with the trailing two axes swapped, see [`transpose`].
    pub fn transpose(&self) -> Result<Tensor<T>> {
        transpose(self)
    }

    /// Returns the element-wise sum of two tensors of equal size, see [`add`].
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>>
    where
        T: AddAssign<T>,
    {
        add(self, other)
    }
}
