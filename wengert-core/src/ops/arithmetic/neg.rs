use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_unary;
use crate::tensor::full;

/// `-a`.
pub fn neg_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().neg();
    let weight = full(value.shape(), -1.0);
    record_unary(a, value, weight, OpKind::Elementwise)
}

/// `factor · a` for a plain (non-differentiated) scalar `factor`.
pub fn scale_op<'t>(factor: f64, a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().scale(factor);
    let weight = full(value.shape(), factor);
    record_unary(a, value, weight, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
