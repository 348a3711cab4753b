// src/tensor/conv.rs

use crate::error::WengertError;
use crate::tensor::Tensor;

impl Tensor {
    /// Circular 1-D convolution along the last axis.
    ///
    /// `self` and `kernel` must have the same shape. Every row (all leading
    /// axes flattened) is convolved independently:
    /// `out[i] = Σ_j self[(i - j) mod n] · kernel[j]`, with `n` the length of
    /// the last axis. The output has the input's shape.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the shapes differ.
    /// * `RankMismatch` for rank-0 tensors.
    pub fn conv1d(&self, kernel: &Tensor) -> Result<Tensor, WengertError> {
        if self.shape != kernel.shape {
            return Err(WengertError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: kernel.shape.clone(),
                operation: "conv1d".to_string(),
            });
        }
        let n = *self.shape.last().ok_or_else(|| WengertError::RankMismatch {
            expected: 1,
            actual: 0,
            operation: "conv1d".to_string(),
        })?;
        if n == 0 {
            return Ok(self.clone());
        }

        let mut result = vec![0.0; self.data.len()];
        for ((signal, weights), out) in self
            .data
            .chunks(n)
            .zip(kernel.data.chunks(n))
            .zip(result.chunks_mut(n))
        {
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = weights
                    .iter()
                    .enumerate()
                    .map(|(j, &w)| signal[(i + n - j) % n] * w)
                    .sum();
            }
        }
        Tensor::new(result, self.shape.clone())
    }
}

#[cfg(test)]
#[path = "conv_test.rs"]
mod tests;
