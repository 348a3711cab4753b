use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_unary;
use crate::tensor::Tensor;

fn record_elementwise<'t>(a: &Var<'t>, value: Tensor, weight: Tensor) -> Result<Var<'t>, WengertError> {
    record_unary(a, value, weight, OpKind::Elementwise)
}

pub fn sin_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    record_elementwise(a, a.data().sin(), a.data().cos())
}

pub fn cos_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    record_elementwise(a, a.data().cos(), a.data().sin().neg())
}

/// Partial: `1 / cos² x`.
pub fn tan_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let weight = a.data().map(|x| 1.0 / (x.cos() * x.cos()));
    record_elementwise(a, a.data().tan(), weight)
}

/// Partial: `1 / √(1 - x²)`.
pub fn asin_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let weight = a.data().map(|x| 1.0 / (1.0 - x * x).sqrt());
    record_elementwise(a, a.data().asin(), weight)
}

/// Partial: `-1 / √(1 - x²)`.
pub fn acos_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let weight = a.data().map(|x| -1.0 / (1.0 - x * x).sqrt());
    record_elementwise(a, a.data().acos(), weight)
}

/// Partial: `1 / (1 + x²)`.
pub fn atan_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let weight = a.data().map(|x| 1.0 / (1.0 + x * x));
    record_elementwise(a, a.data().atan(), weight)
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
