// src/tensor/linalg.rs

use crate::error::WengertError;
use crate::tensor::utils::matrix_dims;
use crate::tensor::Tensor;

impl Tensor {
    /// Matrix product over the last two axes.
    ///
    /// `self` is `[..., m, k]`, `other` is `[..., k, n]`; the leading (batch)
    /// dimensions must be identical. The result is `[..., m, n]`.
    ///
    /// # Errors
    /// * `RankMismatch` if either operand has fewer than two dimensions.
    /// * `IncompatibleShapes` if the inner or batch dimensions disagree.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, WengertError> {
        let (batch, m, k) = matrix_dims(&self.shape).ok_or_else(|| WengertError::RankMismatch {
            expected: 2,
            actual: self.rank(),
            operation: "matmul".to_string(),
        })?;
        let (_, k2, n) = matrix_dims(&other.shape).ok_or_else(|| WengertError::RankMismatch {
            expected: 2,
            actual: other.rank(),
            operation: "matmul".to_string(),
        })?;
        let lhs_batch = &self.shape[..self.rank() - 2];
        let rhs_batch = &other.shape[..other.rank() - 2];
        if k != k2 || lhs_batch != rhs_batch {
            return Err(WengertError::IncompatibleShapes {
                shape1: self.shape.clone(),
                shape2: other.shape.clone(),
                operation: "matmul".to_string(),
            });
        }

        let mut result = vec![0.0; batch * m * n];
        for b in 0..batch {
            let lhs = &self.data[b * m * k..(b + 1) * m * k];
            let rhs = &other.data[b * k * n..(b + 1) * k * n];
            let out = &mut result[b * m * n..(b + 1) * m * n];
            for i in 0..m {
                for p in 0..k {
                    let a = lhs[i * k + p];
                    for j in 0..n {
                        out[i * n + j] += a * rhs[p * n + j];
                    }
                }
            }
        }

        let mut shape = lhs_batch.to_vec();
        shape.push(m);
        shape.push(n);
        Tensor::new(result, shape)
    }

    /// Swaps the last two axes.
    ///
    /// # Errors
    /// `RankMismatch` for tensors of rank < 2.
    pub fn transpose(&self) -> Result<Tensor, WengertError> {
        let (batch, rows, cols) = matrix_dims(&self.shape).ok_or_else(|| WengertError::RankMismatch {
            expected: 2,
            actual: self.rank(),
            operation: "transpose".to_string(),
        })?;
        let mut result = vec![0.0; self.data.len()];
        for b in 0..batch {
            let base = b * rows * cols;
            for i in 0..rows {
                for j in 0..cols {
                    result[base + j * rows + i] = self.data[base + i * cols + j];
                }
            }
        }
        let mut shape = self.shape.clone();
        let rank = shape.len();
        shape.swap(rank - 2, rank - 1);
        Tensor::new(result, shape)
    }
}

#[cfg(test)]
#[path = "linalg_test.rs"]
mod tests;
