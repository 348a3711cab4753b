//! # Recorded operations (`ops`)
//!
//! Every function here follows the same shape: compute the forward value on
//! the operands' tensors, compute the local partial derivatives ("weights"),
//! then append exactly one node to the operands' tape and return a fresh
//! [`Var`] for it. Operands are never modified.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, sub, hadamard, div, neg, scale, powf, pow.
//! - [`linalg`]: matrix product.
//! - [`math_elem`]: trigonometric functions, ln, exp, sqrt.
//! - [`reduction`]: sum and sum of absolute values.
//! - [`conv`]: circular 1-D convolution.
//!
//! The operator overloads on `&Var` (`+ - * / %`, unary `-`, `f64 * &Var` and
//! the compound assignments on `Var`) live in `operators` and are thin sugar
//! over these functions.

use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::tensor::Tensor;

pub mod arithmetic;
pub mod conv;
pub mod linalg;
pub mod math_elem;
pub mod reduction;

mod operators;

pub use arithmetic::{add_op, div_op, hadamard_op, neg_op, pow_op, powf_op, scale_op, sub_op};
pub use conv::conv1d_op;
pub use linalg::matmul_op;
pub use math_elem::{acos_op, asin_op, atan_op, cos_op, exp_op, ln_op, sin_op, sqrt_op, tan_op};
pub use reduction::{abs_sum_op, sum_op};

/// Fails with `TapeMismatch` unless both operands live on the same tape.
pub(crate) fn check_same_tape(a: &Var<'_>, b: &Var<'_>) -> Result<(), WengertError> {
    if a.same_tape(b) {
        Ok(())
    } else {
        Err(WengertError::TapeMismatch)
    }
}

/// Appends a single-parent node for `value` and wraps it in a handle.
pub(crate) fn record_unary<'t>(
    input: &Var<'t>,
    value: Tensor,
    weight: Tensor,
    kind: OpKind,
) -> Result<Var<'t>, WengertError> {
    let tape = input.tape();
    let index = tape.push_unary(input.index(), weight, kind, value.shape())?;
    Ok(Var::from_parts(tape, index, value))
}

/// Appends a two-parent node for `value` and wraps it in a handle.
pub(crate) fn record_binary<'t>(
    a: &Var<'t>,
    b: &Var<'t>,
    value: Tensor,
    weights: [Tensor; 2],
    kind: OpKind,
) -> Result<Var<'t>, WengertError> {
    check_same_tape(a, b)?;
    let tape = a.tape();
    let index = tape.push_binary([a.index(), b.index()], weights, kind, value.shape())?;
    Ok(Var::from_parts(tape, index, value))
}
