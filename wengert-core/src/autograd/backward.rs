use crate::autograd::node::{OpKind, TapeNode};
use crate::error::WengertError;
use crate::tensor::Tensor;

/// Applies the chain rule to a single node.
///
/// Given the gradient accumulated at `node`'s output (`grad`), returns the
/// contribution owed to each parent as `(parent index, gradient)` pairs. The
/// function is pure: it neither reads nor writes any accumulator.
///
/// * `Elementwise`: `grad ⊙ weight` for every parent.
/// * `MatrixProduct` (`C = A·B`, weights `[B, A]`): `grad · Bᵗ` for `A` and
///   `Aᵗ · grad` for `B`.
/// * `Reduction`: the one-element `grad` scales the all-ones weight, spreading
///   equal credit over every element of the reduced input.
///
/// # Errors
/// Shape errors from the tensor operations, or `InternalError` for a node
/// whose arity does not fit its kind (the tape never records such nodes).
pub fn chain_rule(node: &TapeNode, grad: &Tensor) -> Result<Vec<(usize, Tensor)>, WengertError> {
    match node {
        TapeNode::Leaf => Ok(Vec::new()),
        TapeNode::Unary { parent, weight, kind } => match kind {
            OpKind::Elementwise => Ok(vec![(*parent, grad.mul_elem(weight)?)]),
            OpKind::Reduction => Ok(vec![(*parent, weight.broadcast_mul(grad)?)]),
            OpKind::MatrixProduct => Err(WengertError::InternalError(
                "matrix product node with a single parent".to_string(),
            )),
        },
        TapeNode::Binary { parents, weights, kind } => match kind {
            OpKind::Elementwise => Ok(vec![
                (parents[0], grad.mul_elem(&weights[0])?),
                (parents[1], grad.mul_elem(&weights[1])?),
            ]),
            OpKind::MatrixProduct => {
                let grad_a = grad.matmul(&weights[0].transpose()?)?;
                let grad_b = weights[1].transpose()?.matmul(grad)?;
                Ok(vec![(parents[0], grad_a), (parents[1], grad_b)])
            }
            OpKind::Reduction => Err(WengertError::InternalError(
                "reduction node with two parents".to_string(),
            )),
        },
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
