use crate::autograd::tape::Tape;
use crate::error::WengertError;
use crate::ops;
use crate::tensor::Tensor;
use std::fmt;

/// A differentiable value: an index into a [`Tape`] plus the forward value
/// computed when the node was recorded.
///
/// A `Var` never owns tape storage. It borrows the tape it was recorded on,
/// so the compiler guarantees the index it carries is valid for as long as
/// the handle exists. Operations on `Var`s (the `*_op` functions in
/// [`crate::ops`], the methods below and the arithmetic operators) each append
/// exactly one node to the shared tape and return a fresh handle; no existing
/// node or forward value is ever modified.
#[derive(Clone)]
pub struct Var<'t> {
    tape: &'t Tape,
    index: usize,
    data: Tensor,
}

impl<'t> Var<'t> {
    /// Records `data` as a new leaf on `tape`.
    pub fn new(tape: &'t Tape, data: Tensor) -> Self {
        let index = tape.push_leaf(data.shape());
        Var { tape, index, data }
    }

    /// Wraps an already recorded node.
    pub(crate) fn from_parts(tape: &'t Tape, index: usize, data: Tensor) -> Self {
        Var { tape, index, data }
    }

    pub fn tape(&self) -> &'t Tape {
        self.tape
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The forward value captured when this node was recorded.
    pub fn data(&self) -> &Tensor {
        &self.data
    }

    pub fn into_data(self) -> Tensor {
        self.data
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.tape.node(self.index), Ok(node) if node.is_leaf())
    }

    /// Whether both handles were recorded on the same tape.
    pub fn same_tape(&self, other: &Var<'_>) -> bool {
        std::ptr::eq(self.tape, other.tape)
    }

    /// Back-propagates from this value (gradient of the sum of its elements).
    pub fn backward(&self) -> Result<(), WengertError> {
        self.tape.backward(self.index)
    }

    /// Back-propagates from this value, which must hold exactly one element.
    pub fn backward_scalar(&self) -> Result<(), WengertError> {
        self.tape.backward_scalar(self.index)
    }

    /// Gradient accumulated for this value by the last backward sweep(s).
    ///
    /// All zeros if no sweep has reached this node yet.
    pub fn grad(&self) -> Tensor {
        self.tape.accumulator(self.index)
    }

    pub fn matmul(&self, other: &Var<'t>) -> Result<Var<'t>, WengertError> {
        ops::matmul_op(self, other)
    }

    /// Hadamard product.
    pub fn hadamard(&self, other: &Var<'t>) -> Result<Var<'t>, WengertError> {
        ops::hadamard_op(self, other)
    }

    pub fn scale(&self, factor: f64) -> Result<Var<'t>, WengertError> {
        ops::scale_op(factor, self)
    }

    pub fn powf(&self, exponent: f64) -> Result<Var<'t>, WengertError> {
        ops::powf_op(self, exponent)
    }

    pub fn pow(&self, exponent: &Var<'t>) -> Result<Var<'t>, WengertError> {
        ops::pow_op(self, exponent)
    }

    pub fn sin(&self) -> Result<Var<'t>, WengertError> {
        ops::sin_op(self)
    }

    pub fn cos(&self) -> Result<Var<'t>, WengertError> {
        ops::cos_op(self)
    }

    pub fn tan(&self) -> Result<Var<'t>, WengertError> {
        ops::tan_op(self)
    }

    pub fn asin(&self) -> Result<Var<'t>, WengertError> {
        ops::asin_op(self)
    }

    pub fn acos(&self) -> Result<Var<'t>, WengertError> {
        ops::acos_op(self)
    }

    pub fn atan(&self) -> Result<Var<'t>, WengertError> {
        ops::atan_op(self)
    }

    pub fn ln(&self) -> Result<Var<'t>, WengertError> {
        ops::ln_op(self)
    }

    pub fn exp(&self) -> Result<Var<'t>, WengertError> {
        ops::exp_op(self)
    }

    pub fn sqrt(&self) -> Result<Var<'t>, WengertError> {
        ops::sqrt_op(self)
    }

    pub fn sum(&self) -> Result<Var<'t>, WengertError> {
        ops::sum_op(self)
    }

    pub fn abs_sum(&self) -> Result<Var<'t>, WengertError> {
        ops::abs_sum_op(self)
    }

    pub fn conv1d(&self, kernel: &Var<'t>) -> Result<Var<'t>, WengertError> {
        ops::conv1d_op(self, kernel)
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Var")
            .field("index", &self.index)
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Var<'_> {
    /// Prints the forward value followed by the current gradient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tensor:")?;
        write!(f, "{}", self.data)?;
        writeln!(f, "Gradient:")?;
        write!(f, "{}", self.grad())
    }
}

#[cfg(test)]
#[path = "var_test.rs"]
mod tests;
