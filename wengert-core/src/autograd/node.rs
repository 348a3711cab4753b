use crate::tensor::Tensor;

/// Which chain-rule formula the dispatcher applies to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Hadamard product of the incoming gradient with each local weight.
    Elementwise,
    /// Transpose rule for `C = A·B`.
    MatrixProduct,
    /// Broadcast of a one-element gradient back over the reduced input.
    Reduction,
}

/// One recorded forward operation.
///
/// The variant carries exactly the arity of the operation, so the backward
/// sweep never has to guess whether a parent slot is real. Parent indices
/// always point at earlier tape entries.
#[derive(Debug, Clone, PartialEq)]
pub enum TapeNode {
    /// A value introduced directly by the caller.
    Leaf,
    /// One parent. `kind` is `Elementwise` or `Reduction`.
    Unary {
        parent: usize,
        weight: Tensor,
        kind: OpKind,
    },
    /// Two parents. `kind` is `Elementwise` or `MatrixProduct`.
    ///
    /// For `MatrixProduct` the weights are stored as `[B, A]` for `C = A·B`,
    /// i.e. each slot holds the operand the *other* parent was multiplied with.
    Binary {
        parents: [usize; 2],
        weights: [Tensor; 2],
        kind: OpKind,
    },
}

impl TapeNode {
    pub fn kind(&self) -> OpKind {
        match self {
            TapeNode::Leaf => OpKind::Elementwise,
            TapeNode::Unary { kind, .. } | TapeNode::Binary { kind, .. } => *kind,
        }
    }

    /// Real parent indices, in slot order. Empty for leaves.
    pub fn parents(&self) -> &[usize] {
        match self {
            TapeNode::Leaf => &[],
            TapeNode::Unary { parent, .. } => std::slice::from_ref(parent),
            TapeNode::Binary { parents, .. } => parents,
        }
    }

    /// Local weights, one per real parent.
    pub fn weights(&self) -> &[Tensor] {
        match self {
            TapeNode::Leaf => &[],
            TapeNode::Unary { weight, .. } => std::slice::from_ref(weight),
            TapeNode::Binary { weights, .. } => weights,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TapeNode::Leaf)
    }
}
