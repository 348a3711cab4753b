// src/tensor/arithmetic.rs

use crate::error::WengertError;
use crate::tensor::Tensor;

/// Element-wise arithmetic. Operands must have identical shapes; there is no
/// broadcasting except for the explicit one-element case in `broadcast_mul`.
impl Tensor {
    pub fn add(&self, other: &Tensor) -> Result<Tensor, WengertError> {
        self.zip_map(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Tensor) -> Result<Tensor, WengertError> {
        self.zip_map(other, "sub", |a, b| a - b)
    }

    /// Hadamard (element-wise) product.
    pub fn mul_elem(&self, other: &Tensor) -> Result<Tensor, WengertError> {
        self.zip_map(other, "mul_elem", |a, b| a * b)
    }

    /// Hadamard (element-wise) division. Division by zero follows IEEE-754.
    pub fn div(&self, other: &Tensor) -> Result<Tensor, WengertError> {
        self.zip_map(other, "div", |a, b| a / b)
    }

    pub fn scale(&self, factor: f64) -> Tensor {
        self.map(|v| v * factor)
    }

    pub fn neg(&self) -> Tensor {
        self.map(|v| -v)
    }

    /// Multiplies every element by the single element of `scalar`.
    ///
    /// # Errors
    /// `ShapeMismatch` if `scalar` does not hold exactly one element.
    pub fn broadcast_mul(&self, scalar: &Tensor) -> Result<Tensor, WengertError> {
        if scalar.numel() != 1 {
            return Err(WengertError::ShapeMismatch {
                expected: vec![1],
                actual: scalar.shape.clone(),
                operation: "broadcast_mul".to_string(),
            });
        }
        Ok(self.scale(scalar.data[0]))
    }

    /// In-place `self += other`.
    pub fn add_assign_checked(&mut self, other: &Tensor) -> Result<(), WengertError> {
        if !self.same_shape(other) {
            return Err(WengertError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: "add_assign".to_string(),
            });
        }
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a += b);
        Ok(())
    }

    /// In-place `self -= factor * other`, the update rule shared by the optimizers.
    pub fn sub_scaled_assign(&mut self, other: &Tensor, factor: f64) -> Result<(), WengertError> {
        if !self.same_shape(other) {
            return Err(WengertError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: "sub_scaled_assign".to_string(),
            });
        }
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a -= factor * b);
        Ok(())
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|v| *v = value);
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
