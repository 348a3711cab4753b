// src/tensor/create.rs

use crate::error::WengertError;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Tensor {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Tensor {
    full(shape, 1.0)
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full(shape: &[usize], value: f64) -> Tensor {
    let numel = shape.iter().product();
    Tensor {
        data: vec![value; numel],
        shape: shape.to_vec(),
    }
}

/// Creates a new tensor filled with zeros, having the same shape as the input tensor.
pub fn zeros_like(tensor: &Tensor) -> Tensor {
    zeros(tensor.shape())
}

/// Creates a new tensor filled with ones, having the same shape as the input tensor.
pub fn ones_like(tensor: &Tensor) -> Tensor {
    ones(tensor.shape())
}

/// Creates a tensor with elements drawn from `N(mean, std_dev²)` using the thread RNG.
///
/// # Errors
/// Returns `WengertError::InvalidHyperparameter` if `std_dev` is negative or not finite.
pub fn randn(shape: &[usize], mean: f64, std_dev: f64) -> Result<Tensor, WengertError> {
    randn_with_rng(shape, mean, std_dev, &mut rand::thread_rng())
}

/// Same as [`randn`] but draws from the supplied generator, so seeded RNGs
/// give reproducible tensors.
pub fn randn_with_rng<R: Rng + ?Sized>(
    shape: &[usize],
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Tensor, WengertError> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(WengertError::InvalidHyperparameter {
            name: "std_dev".to_string(),
            value: std_dev,
        });
    }
    let normal = Normal::new(mean, std_dev).map_err(|_| WengertError::InvalidHyperparameter {
        name: "std_dev".to_string(),
        value: std_dev,
    })?;
    let numel = shape.iter().product();
    let data_vec: Vec<f64> = (0..numel).map(|_| normal.sample(rng)).collect();
    Tensor::new(data_vec, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
