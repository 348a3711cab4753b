use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_unary;

/// Natural logarithm. Partial: `1 / x`.
pub fn ln_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().ln();
    let weight = a.data().recip();
    record_unary(a, value, weight, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
