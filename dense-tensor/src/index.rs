//! Row-major index mapping.

use crate::{Result, TensorError};

/// Maps a multi-index to its offset in row-major storage, validating it against `shape`.
///
/// Axes are walked from last to first with a running multiplier, so the last axis has stride 1 and every other
/// axis the product of all extents to its right. There are no negative, wrapping or defaulted indices.
pub fn linear_offset(shape: &[usize], indices: &[usize]) -> Result<usize> {
    if indices.len() != shape.len() {
        return Err(TensorError::InvalidRank {
            expected: shape.len(),
            actual: indices.len(),
        });
    }

    let mut offset: usize = 0;
    let mut multiplier: usize = 1;

    for axis in (0..shape.len()).rev() {
        let (index, extent) = (indices[axis], shape[axis]);
        if index >= extent {
            return Err(TensorError::IndexOutOfRange {
                axis,
                index,
                extent,
            });
        }
        offset = offset.saturating_add(multiplier.saturating_mul(index));
        if axis > 0 {
            multiplier = multiplier.saturating_mul(extent);
        }
    }

    Ok(offset)
}
