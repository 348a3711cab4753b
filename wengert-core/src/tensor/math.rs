// src/tensor/math.rs

use crate::error::WengertError;
use crate::tensor::Tensor;

/// Element-wise transcendental functions. Out-of-domain inputs produce NaN
/// exactly as the corresponding `f64` method does.
impl Tensor {
    pub fn sin(&self) -> Tensor {
        self.map(f64::sin)
    }

    pub fn cos(&self) -> Tensor {
        self.map(f64::cos)
    }

    pub fn tan(&self) -> Tensor {
        self.map(f64::tan)
    }

    pub fn asin(&self) -> Tensor {
        self.map(f64::asin)
    }

    pub fn acos(&self) -> Tensor {
        self.map(f64::acos)
    }

    pub fn atan(&self) -> Tensor {
        self.map(f64::atan)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Tensor {
        self.map(f64::ln)
    }

    pub fn exp(&self) -> Tensor {
        self.map(f64::exp)
    }

    pub fn sqrt(&self) -> Tensor {
        self.map(f64::sqrt)
    }

    pub fn recip(&self) -> Tensor {
        self.map(f64::recip)
    }

    pub fn abs(&self) -> Tensor {
        self.map(f64::abs)
    }

    /// Raises every element to the constant power `exponent`.
    pub fn powf(&self, exponent: f64) -> Tensor {
        self.map(|v| v.powf(exponent))
    }

    /// Raises every element to the power held at the same position in `exponents`.
    pub fn pow(&self, exponents: &Tensor) -> Result<Tensor, WengertError> {
        self.zip_map(exponents, "pow", f64::powf)
    }
}
