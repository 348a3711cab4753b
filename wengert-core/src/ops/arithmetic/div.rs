use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::record_binary;

/// Element-wise quotient `a ⊘ b`.
///
/// For z = a / b:
/// dz/da = 1 / b
/// dz/db = -a / b²
///
/// Division by zero follows IEEE-754 (infinities or NaN), it is not an error.
pub fn div_op<'t>(a: &Var<'t>, b: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().div(b.data())?;
    let grad_a = b.data().recip();
    let b_squared = b.data().mul_elem(b.data())?;
    let grad_b = a.data().neg().div(&b_squared)?;
    record_binary(a, b, value, [grad_a, grad_b], OpKind::Elementwise)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
