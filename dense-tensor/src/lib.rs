//! Library crate for dense_tensor
//!

mod access;
mod constructive;
mod display;
mod error;
mod iterator;
mod misc;
mod storage;

pub mod index;
pub mod ops;
pub mod shape;


pub use crate::error::TensorError;
pub use crate::shape::{Shape, compute_size};

use crate::storage::Storage;

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Represents a dense multi-dimensional tensor of arbitrary rank with element type T.
///
/// Elements live in a single owned, contiguous buffer in row-major (C) order: the last axis varies fastest.
/// Cloning performs a deep copy of both shape and storage, so two tensors never observe each other's writes.
/// Moving out with [`Tensor::take`] leaves the source in the canonical empty state.
///
/// Access comes in two tiers:
/// - linear indexing (`tensor[i]`) goes straight to the buffer and only relies on the slice bound check;
/// - multi-index access ([`Tensor::get`], [`Tensor::get_mut`]) validates rank and every axis before touching data.
///
/// # Empty and scalar tensors
/// A tensor built from an empty shape is a scalar with exactly one element. The default tensor is different:
/// it has rank 0, size 0 and no storage at all, and is what a tensor becomes after its content was taken.
pub struct Tensor<T> {
    storage: Storage<T>,
    shape: Shape,
    size: usize,
}
