use crate::autograd::Var;
use crate::error::WengertError;
use crate::ops::{hadamard_op, ln_op, neg_op, sum_op};

/// `-Σ target ⊙ ln(input)`, for `input` holding probabilities.
///
/// Zero probabilities give an infinite loss, not an error.
pub fn cross_entropy<'t>(input: &Var<'t>, target: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let log_input = ln_op(input)?;
    neg_op(&sum_op(&hadamard_op(target, &log_input)?)?)
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
