use super::*;

impl<T> Tensor<T> {
    /// Returns an iterator over the elements in linear storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.as_mut_slice().iter_mut()
    }

    /// Returns an iterator over `(multi-index, element)` pairs in row-major order.
    pub fn indexed(&self) -> impl Iterator<Item = (Vec<usize>, &T)> {
        self.shape.indices().zip(self.storage.as_slice().iter())
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tensor<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
