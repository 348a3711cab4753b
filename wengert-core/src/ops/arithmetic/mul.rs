use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_binary;

/// Hadamard (element-wise) product `a ⊙ b`.
///
/// The weights are the operands' values at record time: `b` for `a` and `a`
/// for `b`. Rebinding either `Var` afterwards does not change them.
pub fn hadamard_op<'t>(a: &Var<'t>, b: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().mul_elem(b.data())?;
    let weights = [b.data().clone(), a.data().clone()];
    record_binary(a, b, value, weights, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
