use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_unary;

/// `eˣ`, which is its own derivative.
pub fn exp_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().exp();
    let weight = value.clone();
    record_unary(a, value, weight, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
