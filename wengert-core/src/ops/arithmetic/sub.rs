use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_binary;
use crate::tensor::{full, ones_like};

/// `a - b`. Partials are `1` for `a` and `-1` for `b`.
pub fn sub_op<'t>(a: &Var<'t>, b: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().sub(b.data())?;
    let weights = [ones_like(&value), full(value.shape(), -1.0)];
    record_binary(a, b, value, weights, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
