use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_binary;
use crate::tensor::ones_like;

/// Circular 1-D convolution of `a` with `kernel` along the last axis.
///
/// Both operands must have the same shape. The recorded weights are
/// `conv1d(ones, kernel)` for `a` and `conv1d(a, ones)` for `kernel`: the
/// column sums of the convolution's Jacobians. They give the exact gradient
/// when the gradient reaching this node is uniform along the last axis (for
/// instance when the convolution is followed directly by a sum).
pub fn conv1d_op<'t>(a: &Var<'t>, kernel: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().conv1d(kernel.data())?;
    let ones = ones_like(a.data());
    let grad_a = ones.conv1d(kernel.data())?;
    let grad_kernel = a.data().conv1d(&ones)?;
    record_binary(a, kernel, value, [grad_a, grad_kernel], OpKind::Elementwise)
}

#[cfg(test)]
#[path = "conv1d_test.rs"]
mod tests;
