use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_unary;

/// Square root. Partial: `1 / (2√x)`, infinite at zero.
pub fn sqrt_op<'t>(a: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().sqrt();
    let weight = value.map(|s| 0.5 / s);
    record_unary(a, value, weight, OpKind::Elementwise)
}

#[cfg(test)]
#[path = "sqrt_test.rs"]
mod tests;
