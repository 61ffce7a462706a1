use super::*;

impl<T> Tensor<T> {
    /// Creates a tensor of the given shape from flat data laid out in row-major order.
    /// Returns an error if the data length differs from the size of the shape.
    pub fn new(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let size = compute_size(shape);

        if data.len() != size {
            log::debug!("rejecting {} elements for shape {shape:?} of size {size}", data.len());
            return Err(TensorError::SizeMismatch {
                expected: size,
                actual: data.len(),
            });
        }

        Ok(Self {
            storage: Storage::from_vec(data),
            shape: Shape::from(shape),
            size,
        })
    }

    /// Creates a tensor of the given shape filled with default values.
    pub fn with_shape(shape: &[usize]) -> Self
    where
        T: Default + Clone,
    {
        let size = compute_size(shape);
        Self {
            storage: Storage::filled(size),
            shape: Shape::from(shape),
            size,
        }
    }

    /// Creates a tensor of the given shape with every element set to `value`.
    pub fn full(shape: &[usize], value: T) -> Self
    where
        T: Clone,
    {
        let size = compute_size(shape);
        Self {
            storage: Storage::from_elem(value, size),
            shape: Shape::from(shape),
            size,
        }
    }

    /// Creates a rank-0 tensor holding a single value.
    pub fn scalar(value: T) -> Self {
        Self {
            storage: Storage::from_vec(vec![value]),
            shape: Shape::default(),
            size: 1,
        }
    }

    /// Moves shape and storage out into a new tensor, leaving `self` in the canonical empty state.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T> Default for Tensor<T> {
    /// The canonical empty tensor: rank 0, size 0, no storage.
    fn default() -> Self {
        Self {
            storage: Storage::default(),
            shape: Shape::default(),
            size: 0,
        }
    }
}

impl<T: Clone> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            shape: self.shape.clone(),
            size: self.size,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.copy_from(&source.storage);
        self.shape.clone_from(&source.shape);
        self.size = source.size;
    }
}

impl<T> From<Vec<T>> for Tensor<T> {
    /// Creates a rank-1 tensor which owns the given data.
    fn from(data: Vec<T>) -> Self {
        let size = data.len();
        Self {
            storage: Storage::from_vec(data),
            shape: Shape::new(vec![size]),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_create_from_flat_data() -> Result<()> {
        let tensor = Tensor::new(vec![1, 2, 3, 4, 5, 6], &[2, 3])?;
        assert_eq!(tensor.shape(), &[2, 3]);
        assert_eq!(tensor.rank(), 2);
        assert_eq!(tensor.size(), 6);
        assert_eq!(tensor.as_slice(), &[1, 2, 3, 4, 5, 6]);

        Ok(())
    }

    #[test]
    fn rejects_flat_data_of_wrong_length() {
        let result = Tensor::new(vec![1.0_f32, 2.0, 3.0], &[2, 2]);
        assert_eq!(
            result.err(),
            Some(TensorError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn can_create_default_filled() {
        let tensor = Tensor::<f64>::with_shape(&[3, 2, 2]);
        assert_eq!(tensor.size(), 12);
        assert_eq!(tensor.rank(), 3);
        assert!(tensor.iter().all(|&v| v == 0.0));

        let tensor = Tensor::full(&[2, 2], 7u8);
        assert_eq!(tensor.as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn zero_extent_gives_no_elements() {
        let tensor = Tensor::<i32>::with_shape(&[3, 0]);
        assert_eq!(tensor.rank(), 2);
        assert_eq!(tensor.size(), 0);
        assert!(tensor.as_slice().is_empty());
        assert!(!tensor.is_empty());

        let tensor = Tensor::<u8>::with_shape(&[usize::MAX, usize::MAX, 0]);
        assert_eq!(tensor.rank(), 3);
        assert_eq!(tensor.size(), 0);
        assert!(tensor.get(&[0, 0, 0]).is_err());
    }

    #[test]
    fn empty_shape_is_a_scalar() -> Result<()> {
        let tensor = Tensor::<i32>::with_shape(&[]);
        assert_eq!(tensor.rank(), 0);
        assert_eq!(tensor.size(), 1);
        assert!(!tensor.is_empty());

        let tensor = Tensor::scalar(42);
        assert_eq!(*tensor.get(&[])?, 42);
        assert_eq!(tensor, Tensor::new(vec![42], &[])?);

        Ok(())
    }

    #[test]
    fn default_is_canonical_empty() {
        let tensor = Tensor::<i32>::default();
        assert_eq!(tensor.rank(), 0);
        assert_eq!(tensor.size(), 0);
        assert!(tensor.is_empty());
        assert!(tensor.as_slice().is_empty());
    }

    #[test]
    fn clone_is_deep() -> Result<()> {
        let mut original = Tensor::new(vec![1, 2, 3, 4], &[2, 2])?;
        let mut copy = original.clone();

        *copy.get_mut(&[0, 1])? = 20;
        assert_eq!(original.as_slice(), &[1, 2, 3, 4]);

        original[3] = 40;
        assert_eq!(copy.as_slice(), &[1, 20, 3, 4]);

        Ok(())
    }

    #[test]
    fn clone_from_replaces_shape_and_data() -> Result<()> {
        let source = Tensor::new(vec![1, 2, 3, 4, 5, 6], &[3, 2])?;

        let mut same_size = Tensor::<i32>::with_shape(&[2, 3]);
        same_size.clone_from(&source);
        assert_eq!(same_size, source);

        let mut other_size = Tensor::<i32>::with_shape(&[5]);
        other_size.clone_from(&source);
        assert_eq!(other_size, source);

        other_size[0] = 100;
        assert_eq!(source[0], 1);

        Ok(())
    }

    #[test]
    fn take_leaves_source_empty() -> Result<()> {
        let mut source = Tensor::new(vec![1, 2, 3, 4, 5, 6, 7, 8], &[2, 2, 2])?;
        let moved = source.take();

        assert_eq!(moved.shape(), &[2, 2, 2]);
        assert_eq!(*moved.get(&[1, 1, 1])?, 8);

        assert_eq!(source.rank(), 0);
        assert_eq!(source.size(), 0);
        assert!(source.is_empty());
        assert!(source.as_slice().is_empty());
        assert!(source.get(&[]).is_err());

        Ok(())
    }

    #[test]
    fn can_create_from_vec() {
        let tensor = Tensor::from(vec![2, 4, 6, 8]);
        assert_eq!(tensor.shape(), &[4]);
        assert_eq!(tensor.size(), 4);
    }
}
