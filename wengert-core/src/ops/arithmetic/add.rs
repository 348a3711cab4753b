use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_binary;
use crate::tensor::ones_like;

/// `a + b`. Both partials are ones.
pub fn add_op<'t>(a: &Var<'t>, b: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().add(b.data())?;
    let weights = [ones_like(&value), ones_like(&value)];
    record_binary(a, b, value, weights, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
