use crate::autograd::{OpKind, Var};
use crate::error::WengertError;
use crate::ops::{record_binary, record_unary};

/// `a^k` for a constant exponent. Partial: `k · a^(k-1)`.
pub fn powf_op<'t>(a: &Var<'t>, exponent: f64) -> Result<Var<'t>, WengertError> {
    let value = a.data().powf(exponent);
    let weight = a.data().powf(exponent - 1.0).scale(exponent);
    record_unary(a, value, weight, OpKind::Elementwise)
}

/// `a^b` element-wise, differentiating through both base and exponent.
///
/// For z = a^b:
/// dz/da = b · a^(b-1)
/// dz/db = a^b · ln a
///
/// The exponent partial is NaN for negative bases, as `ln` is.
pub fn pow_op<'t>(a: &Var<'t>, b: &Var<'t>) -> Result<Var<'t>, WengertError> {
    let value = a.data().pow(b.data())?;
    let reduced_exponent = b.data().map(|v| v - 1.0);
    let grad_a = a.data().pow(&reduced_exponent)?.mul_elem(b.data())?;
    let grad_b = value.mul_elem(&a.data().ln())?;
    record_binary(a, b, value, [grad_a, grad_b], OpKind::Elementwise)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
