use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_binary;

/// Matrix product `C = A · B` over the last two axes.
///
/// Leading (batch) axes must match exactly. The node stores `[B, A]` so that
/// the backward sweep can form `grad · Bᵗ` for `A` and `Aᵗ · grad` for `B`.
///
/// # Errors
/// * `RankMismatch` if either operand has fewer than two axes.
/// * `IncompatibleShapes` if the inner dimensions or batch axes differ.
/// * `TapeMismatch` if the operands live on different tapes.
pub fn matmul_op<'t>(a: &Var<'t>, b: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().matmul(b.data())?;
    let weights = [b.data().clone(), a.data().clone()];
    record_binary(a, b, value, weights, OpKind::MatrixProduct)
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
