use super::*;

/// Tensors are equal when both shape and elements match.
impl<T: PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.storage == other.storage
    }
}

impl<T: Eq> Eq for Tensor<T> {}
