use crate::autograd::Var;
use crate::error::WengertError;
use crate::ops::{abs_sum_op, powf_op, scale_op, sub_op};

/// Mean of the squared element-wise errors.
pub fn mean_squared_error<'t>(input: &Var<'t>, target: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let n = input.data().numel() as f64;
    let squared = powf_op(&sub_op(input, target)?, 2.0)?;
    scale_op(1.0 / n, &abs_sum_op(&squared)?)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
