use super::*;
use std::ops::{Index, IndexMut};

impl<T> Tensor<T> {
    // Resolves a multi-index to a storage offset; the canonical empty tensor has no element for any index.
    fn offset(&self, indices: &[usize]) -> Result<usize> {
        let offset = self.shape.offset(indices)?;
        if offset >= self.storage.len() {
            return Err(TensorError::IndexOutOfRange {
                axis: 0,
                index: indices.first().copied().unwrap_or(0),
                extent: self.storage.len(),
            });
        }
        Ok(offset)
    }

    /// Returns a reference to the element at the given multi-index.
    /// Fails if the number of indices differs from the rank or any of them is out of its axis range.
    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let offset = self.offset(indices)?;
        Ok(&self.storage.as_slice()[offset])
    }

    /// Returns a mutable reference to the element at the given multi-index.
    pub fn get_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = self.offset(indices)?;
        Ok(&mut self.storage.as_mut_slice()[offset])
    }

    /// Writes `value` at the given multi-index.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
        *self.get_mut(indices)? = value;
        Ok(())
    }

    pub fn shape(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True only for the canonical empty tensor (rank 0, no storage).
    ///
    /// Unlike `Vec::is_empty`, this is false for tensors with a zero extent such as `[3, 0]`: they have no
    /// elements but still carry a shape. Check `size() == 0` for "has no elements".
    pub fn is_empty(&self) -> bool {
        self.rank() == 0 && self.size == 0
    }

    pub fn strides(&self) -> Vec<usize> {
        self.shape.strides()
    }

    /// Elements in linear storage order.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }
}

/// Linear access straight into storage. No dimensional validation is done, only the buffer bound is enforced.
impl<T> Index<usize> for Tensor<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.storage.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Tensor<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.storage.as_mut_slice()[index]
    }
}
