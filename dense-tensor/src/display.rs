use super::*;
use std::fmt;

/// Renders every element in linear storage order as `[e0, e1, ..., en]`.
impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("elements", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_display_tensor() -> Result<()> {
        let tensor = Tensor::new(vec![1, 2, 3, 4, 5, 6], &[2, 3])?;
        assert_eq!(tensor.to_string(), "[1, 2, 3, 4, 5, 6]");

        let tensor = Tensor::new(vec![0.5_f32, 1.25], &[2, 1])?;
        assert_eq!(format!("{tensor}"), "[0.5, 1.25]");

        assert_eq!(Tensor::scalar(3).to_string(), "[3]");
        assert_eq!(Tensor::<i32>::default().to_string(), "[]");

        Ok(())
    }

    #[test]
    fn can_debug_tensor() -> Result<()> {
        let tensor = Tensor::new(vec![1, 2], &[1, 2])?;
        assert_eq!(
            format!("{tensor:?}"),
            "Tensor { shape: Shape([1, 2]), elements: [1, 2] }"
        );

        Ok(())
    }
}
