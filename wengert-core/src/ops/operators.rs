//! Operator sugar over the `*_op` functions.
//!
//! Binary operators take `&Var` on both sides and return
//! `Result<Var, WengertError>`, so shape or tape errors surface with `?`.
//! `*` is the matrix product and `%` the Hadamard product.
//!
//! Compound assignment (`x += &y`, ...) records the binary operation and
//! rebinds the left-hand handle to the new node. Like in-place tensor
//! arithmetic, it panics if the operation fails.

use crate::autograd::Var;
use crate::error::WengertError;
use crate::ops::{add_op, div_op, hadamard_op, matmul_op, neg_op, scale_op, sub_op};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<'a, 't> $trait<&'a Var<'t>> for &'a Var<'t> {
            type Output = Result<Var<'t>, WengertError>;

            fn $method(self, rhs: &'a Var<'t>) -> Self::Output {
                $op(self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, matmul_op);
impl_binary_operator!(Div, div, div_op);
impl_binary_operator!(Rem, rem, hadamard_op);

macro_rules! impl_assign_operator {
    ($trait:ident, $method:ident, $op:ident, $symbol:literal) => {
        impl<'a, 't> $trait<&'a Var<'t>> for Var<'t> {
            fn $method(&mut self, rhs: &'a Var<'t>) {
                match $op(self, rhs) {
                    Ok(result) => *self = result,
                    Err(e) => panic!("Var {} failed: {}", $symbol, e),
                }
            }
        }
    };
}

impl_assign_operator!(AddAssign, add_assign, add_op, "+=");
impl_assign_operator!(SubAssign, sub_assign, sub_op, "-=");
impl_assign_operator!(MulAssign, mul_assign, matmul_op, "*=");
impl_assign_operator!(DivAssign, div_assign, div_op, "/=");
impl_assign_operator!(RemAssign, rem_assign, hadamard_op, "%=");

impl<'a, 't> Mul<&'a Var<'t>> for f64 {
    type Output = Result<Var<'t>, WengertError>;

    fn mul(self, rhs: &'a Var<'t>) -> Self::Output {
        scale_op(self, rhs)
    }
}

impl<'a, 't> Neg for &'a Var<'t> {
    type Output = Result<Var<'t>, WengertError>;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "operators_test.rs"]
mod tests;
