use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_unary;
use crate::tensor::ones_like;

/// Sum of all elements, as a tensor of shape `[1]`.
///
/// The reduction weight is all ones shaped like the input, so the backward
/// sweep spreads the incoming one-element gradient over every input element.
pub fn sum_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().sum();
    let weight = ones_like(a.data());
    record_unary(a, value, weight, OpKind::Reduction)
}

/// Sum of absolute values, as a tensor of shape `[1]`.
///
/// The recorded weight is all ones, not `sign(x)`: the gradient is exact only
/// where every input element is non-negative.
pub fn abs_sum_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().abs_sum();
    let weight = ones_like(a.data());
    record_unary(a, value, weight, OpKind::Reduction)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
