// src/tensor/mod.rs

use crate::error::WengertError;
use num_traits::NumCast;

mod arithmetic;
mod conv;
pub mod create;
mod linalg;
mod math;
mod reduction;
mod traits;

pub mod utils;

pub use create::{full, ones, ones_like, randn, randn_with_rng, zeros, zeros_like};

/// Dense, row-major tensor of `f64` values.
///
/// This is the value type the autodiff engine computes with. It owns its
/// element buffer and its shape; cloning copies both. Every operation that
/// can fail because of incompatible shapes returns a `Result` and never
/// mutates its operands.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    pub(crate) data: Vec<f64>,
    pub(crate) shape: Vec<usize>,
}

impl Tensor {
    /// Creates a new tensor from flat row-major data and a shape.
    ///
    /// # Errors
    /// Returns `WengertError::TensorCreationError` if `data_vec.len()` does not
    /// equal the product of `shape`.
    pub fn new(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, WengertError> {
        let numel: usize = shape.iter().product();
        if data_vec.len() != numel {
            return Err(WengertError::TensorCreationError {
                data_len: data_vec.len(),
                shape,
            });
        }
        Ok(Tensor {
            data: data_vec,
            shape,
        })
    }

    /// Creates a one-element tensor of shape `[1]`, the shape produced by reductions.
    pub fn scalar(value: f64) -> Self {
        Tensor {
            data: vec![value],
            shape: vec![1],
        }
    }

    /// Builds a tensor from any primitive numeric data (integers, `f32`, ...).
    pub fn from_numeric<T: NumCast + Copy>(data: &[T], shape: Vec<usize>) -> Result<Self, WengertError> {
        let converted = data
            .iter()
            .map(|&v| {
                <f64 as NumCast>::from(v).ok_or_else(|| {
                    WengertError::UnsupportedOperation("value cannot be represented as f64".to_string())
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        Tensor::new(converted, shape)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Flat row-major view of the elements.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Copies the elements out, converting each one to `T`.
    ///
    /// Returns `None` if any element cannot be represented in `T`.
    pub fn to_vec_as<T: NumCast>(&self) -> Option<Vec<T>> {
        self.data.iter().map(|&v| T::from(v)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn same_shape(&self, other: &Tensor) -> bool {
        self.shape == other.shape
    }

    /// Reads the element at the given multi-dimensional coordinates.
    pub fn get(&self, coords: &[usize]) -> Result<f64, WengertError> {
        let offset = utils::offset_of(coords, &self.shape).ok_or_else(|| WengertError::IndexOutOfBounds {
            index: coords.to_vec(),
            shape: self.shape.clone(),
        })?;
        Ok(self.data[offset])
    }

    /// Writes the element at the given multi-dimensional coordinates.
    pub fn set(&mut self, coords: &[usize], value: f64) -> Result<(), WengertError> {
        let offset = utils::offset_of(coords, &self.shape).ok_or_else(|| WengertError::IndexOutOfBounds {
            index: coords.to_vec(),
            shape: self.shape.clone(),
        })?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the only element of a one-element tensor.
    pub fn item(&self) -> Result<f64, WengertError> {
        if self.data.len() != 1 {
            return Err(WengertError::ShapeMismatch {
                expected: vec![1],
                actual: self.shape.clone(),
                operation: "item".to_string(),
            });
        }
        Ok(self.data[0])
    }

    /// Applies `f` to every element, producing a tensor of the same shape.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Tensor {
        Tensor {
            data: self.data.iter().map(|&v| f(v)).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Combines two same-shaped tensors element by element.
    pub(crate) fn zip_map<F: Fn(f64, f64) -> f64>(
        &self,
        other: &Tensor,
        operation: &str,
        f: F,
    ) -> Result<Tensor, WengertError> {
        if !self.same_shape(other) {
            return Err(WengertError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: operation.to_string(),
            });
        }
        Ok(Tensor {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            shape: self.shape.clone(),
        })
    }
}
