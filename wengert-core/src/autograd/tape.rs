use crate::autograd::backward::chain_rule;
use crate::autograd::node::{OpKind, TapeNode};
use crate::autograd::var::Var;
use crate::error::WengertError;
use crate::tensor::{ones, zeros, Tensor};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct TapeInner {
    nodes: Vec<TapeNode>,
    /// One accumulator per node, indexed like `nodes`.
    grads: Vec<Tensor>,
    swept: bool,
}

/// Append-only record of a forward computation (a Wengert list).
///
/// A `Tape` owns every recorded node and its gradient accumulator. `Var`s
/// borrow the tape they were recorded on, so they can never outlive it, and
/// the `RefCell` inside makes the tape `!Sync`: one tape belongs to one
/// thread. Independent computations use independent tapes.
///
/// The tape only grows. Nothing is evicted until the tape itself is dropped,
/// so long-running code should scope one tape per forward/backward pass.
#[derive(Debug, Default)]
pub struct Tape {
    inner: RefCell<TapeInner>,
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `data` as a new leaf and returns its handle.
    pub fn var(&self, data: Tensor) -> Var<'_> {
        Var::new(self, data)
    }

    /// Number of recorded nodes (equal to the number of accumulators).
    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().nodes.is_empty()
    }

    /// Whether `backward` has run on this tape since creation or the last `zero_grad`.
    pub fn was_swept(&self) -> bool {
        self.inner.borrow().swept
    }

    /// Returns a copy of the node recorded at `index`.
    pub fn node(&self, index: usize) -> Result<TapeNode, WengertError> {
        let inner = self.inner.borrow();
        inner
            .nodes
            .get(index)
            .cloned()
            .ok_or(WengertError::InvalidTapeIndex {
                index,
                len: inner.nodes.len(),
            })
    }

    /// Appends a leaf node with a zero accumulator of `shape`.
    pub fn push_leaf(&self, shape: &[usize]) -> usize {
        self.push(TapeNode::Leaf, shape)
    }

    /// Appends a single-parent node.
    ///
    /// # Errors
    /// * `InvalidTapeIndex` if `parent` is not an existing node.
    /// * `UnsupportedOperation` if `kind` is `MatrixProduct`.
    /// * `ShapeMismatch` if the weight cannot be combined with the output
    ///   gradient during the backward sweep.
    pub fn push_unary(
        &self,
        parent: usize,
        weight: Tensor,
        kind: OpKind,
        output_shape: &[usize],
    ) -> Result<usize, WengertError> {
        let parent_shape = self.accumulator_shape(parent)?;
        match kind {
            OpKind::Elementwise => {
                check_shape(&weight, output_shape, "push_unary")?;
                check_shape_eq(&parent_shape, output_shape, "push_unary")?;
            }
            OpKind::Reduction => {
                check_shape(&weight, &parent_shape, "push_unary")?;
                let numel: usize = output_shape.iter().product();
                if numel != 1 {
                    return Err(WengertError::ShapeMismatch {
                        expected: vec![1],
                        actual: output_shape.to_vec(),
                        operation: "push_unary (reduction output)".to_string(),
                    });
                }
            }
            OpKind::MatrixProduct => {
                return Err(WengertError::UnsupportedOperation(
                    "a matrix product needs two parents".to_string(),
                ))
            }
        }
        Ok(self.push(TapeNode::Unary { parent, weight, kind }, output_shape))
    }

    /// Appends a two-parent node.
    ///
    /// # Errors
    /// * `InvalidTapeIndex` if either parent is not an existing node.
    /// * `UnsupportedOperation` if `kind` is `Reduction`.
    /// * `ShapeMismatch` for element-wise nodes whose weights or parents are
    ///   not shaped like the output.
    pub fn push_binary(
        &self,
        parents: [usize; 2],
        weights: [Tensor; 2],
        kind: OpKind,
        output_shape: &[usize],
    ) -> Result<usize, WengertError> {
        let parent_shapes = [
            self.accumulator_shape(parents[0])?,
            self.accumulator_shape(parents[1])?,
        ];
        match kind {
            OpKind::Elementwise => {
                for (weight, parent_shape) in weights.iter().zip(parent_shapes.iter()) {
                    check_shape(weight, output_shape, "push_binary")?;
                    check_shape_eq(parent_shape, output_shape, "push_binary")?;
                }
            }
            OpKind::MatrixProduct => {}
            OpKind::Reduction => {
                return Err(WengertError::UnsupportedOperation(
                    "a reduction has exactly one parent".to_string(),
                ))
            }
        }
        Ok(self.push(TapeNode::Binary { parents, weights, kind }, output_shape))
    }

    fn push(&self, node: TapeNode, output_shape: &[usize]) -> usize {
        let mut inner = self.inner.borrow_mut();
        let index = inner.nodes.len();
        log::trace!("tape: recording node {} ({:?}) parents={:?}", index, node.kind(), node.parents());
        inner.nodes.push(node);
        inner.grads.push(zeros(output_shape));
        index
    }

    fn accumulator_shape(&self, index: usize) -> Result<Vec<usize>, WengertError> {
        let inner = self.inner.borrow();
        inner
            .grads
            .get(index)
            .map(|g| g.shape().to_vec())
            .ok_or(WengertError::InvalidTapeIndex {
                index,
                len: inner.grads.len(),
            })
    }

    /// Back-propagates from node `from` to every node recorded before it.
    ///
    /// The terminal is seeded with ones of its own shape, so this computes
    /// the gradient of the *sum* of the terminal's elements. Nodes are then
    /// visited once each, from `from` down to `0`, and their contributions are
    /// added into the parents' accumulators. Accumulators are never cleared
    /// here: a second call adds on top of the first (see [`Tape::zero_grad`]).
    ///
    /// # Errors
    /// * `InvalidTapeIndex` if `from` is not an existing node.
    /// * `GradientAccumulationShapeMismatch` if a contribution does not fit
    ///   its parent's accumulator.
    ///
    /// A failed sweep leaves some accumulators updated and the tape marked as
    /// swept. Call [`Tape::zero_grad`] or discard the tape before reusing it.
    pub fn backward(&self, from: usize) -> Result<(), WengertError> {
        let mut inner = self.inner.borrow_mut();
        let len = inner.nodes.len();
        if from >= len {
            return Err(WengertError::InvalidTapeIndex { index: from, len });
        }
        if inner.swept {
            log::warn!("tape: backward called again without zero_grad; gradients accumulate on top of the previous sweep");
        }
        log::debug!("tape: backward from node {} over {} nodes", from, from + 1);

        let seed = ones(inner.grads[from].shape());
        inner.grads[from] = seed;
        inner.swept = true;

        for i in (0..=from).rev() {
            let contributions = chain_rule(&inner.nodes[i], &inner.grads[i])?;
            for (parent, contribution) in contributions {
                log::trace!("tape: node {} -> parent {}", i, parent);
                let target = &mut inner.grads[parent];
                if target.shape() != contribution.shape() {
                    return Err(WengertError::GradientAccumulationShapeMismatch {
                        index: parent,
                        expected: target.shape().to_vec(),
                        actual: contribution.shape().to_vec(),
                    });
                }
                target.add_assign_checked(&contribution)?;
            }
        }

        log::debug!("tape: backward from node {} done", from);
        Ok(())
    }

    /// Like [`Tape::backward`] but refuses terminals with more than one element,
    /// for callers that want a true scalar-loss gradient.
    pub fn backward_scalar(&self, from: usize) -> Result<(), WengertError> {
        let shape = self.accumulator_shape(from)?;
        if shape.iter().product::<usize>() != 1 {
            return Err(WengertError::BackwardNonScalar { shape });
        }
        self.backward(from)
    }

    /// Copy of the accumulator for node `index`.
    ///
    /// Before any `backward` call this is all zeros, which is well defined but
    /// carries no information.
    pub fn grad(&self, index: usize) -> Result<Tensor, WengertError> {
        let inner = self.inner.borrow();
        if !inner.swept {
            log::warn!("tape: reading gradient of node {} before any backward sweep", index);
        }
        inner
            .grads
            .get(index)
            .cloned()
            .ok_or(WengertError::InvalidTapeIndex {
                index,
                len: inner.grads.len(),
            })
    }

    /// Accumulator read for handles this tape issued itself; their indices are
    /// always in range because the tape never shrinks.
    pub(crate) fn accumulator(&self, index: usize) -> Tensor {
        let inner = self.inner.borrow();
        if !inner.swept {
            log::warn!("tape: reading gradient of node {} before any backward sweep", index);
        }
        inner.grads[index].clone()
    }

    /// Resets every accumulator to zero.
    pub fn zero_grad(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.grads.iter_mut().for_each(|g| g.fill(0.0));
        inner.swept = false;
        log::debug!("tape: cleared {} accumulators", inner.grads.len());
    }
}

fn check_shape(tensor: &Tensor, expected: &[usize], operation: &str) -> Result<(), WengertError> {
    check_shape_eq(tensor.shape(), expected, operation)
}

fn check_shape_eq(actual: &[usize], expected: &[usize], operation: &str) -> Result<(), WengertError> {
    if actual != expected {
        return Err(WengertError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tape_test.rs"]
mod tests;
