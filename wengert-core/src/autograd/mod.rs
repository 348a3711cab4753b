//! # Reverse-mode automatic differentiation
//!
//! The engine records every forward operation on a [`Tape`] (a Wengert list):
//! an append-only vector of [`TapeNode`]s, each naming its parents by index and
//! carrying the local partial derivatives ("weights") computed at record time.
//! A backward sweep walks the tape once in reverse creation order and applies
//! [`chain_rule`] to every node, accumulating gradients into one accumulator
//! per node.
//!
//! - [`tape`]: storage, recording and the backward sweep.
//! - [`node`]: the node representation and [`OpKind`].
//! - [`backward`]: the per-node chain-rule dispatcher.
//! - [`var`]: the [`Var`] handle user code computes with.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward;
pub mod grad_check;
pub mod node;
pub mod tape;
pub mod var;

pub use backward::chain_rule;
pub use node::{OpKind, TapeNode};
pub use tape::Tape;
pub use var::Var;
