// src/tensor/reduction.rs

use crate::tensor::Tensor;

/// Full reductions. Both return a one-element tensor of shape `[1]`.
impl Tensor {
    pub fn sum(&self) -> Tensor {
        Tensor::scalar(self.data.iter().sum())
    }

    /// Sum of absolute values (the L1 norm of the flattened tensor).
    pub fn abs_sum(&self) -> Tensor {
        Tensor::scalar(self.data.iter().map(|v| v.abs()).sum())
    }
}
