use crate::autograd::Var;
use crate::error::WengertError;
use crate::ops::{abs_sum_op, scale_op, sub_op};

/// `Σ |input - target|`.
///
/// Built on `abs_sum`, whose recorded weight is all ones: the gradient with
/// respect to `input` is `+1` everywhere regardless of the sign of the error.
pub fn l1_loss<'t>(input: &Var<'t>, target: &Var<'t>) -> Result<Var<'t>, WengertError> {
    abs_sum_op(&sub_op(input, target)?)
}

/// [`l1_loss`] divided by the number of elements.
pub fn mean_error<'t>(input: &Var<'t>, target: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let n = input.data().numel() as f64;
    scale_op(1.0 / n, &l1_loss(input, target)?)
}

#[cfg(test)]
#[path = "l1_test.rs"]
mod tests;
