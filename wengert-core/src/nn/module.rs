use crate::autograd::Var;
use crate::error::WengertError;
use crate::nn::parameter::{Bindings, ParamId};
use std::fmt::Debug;

/// The base trait for layers built on a [`ParamStore`](crate::nn::ParamStore).
///
/// A module only remembers the ids of its parameters. The values are looked
/// up in the [`Bindings`] of the tape the forward pass records on.
pub trait Module: Debug {
    /// Records the module's computation for `input` on `input`'s tape.
    fn forward<'t>(&self, bindings: &Bindings<'t>, input: &Var<'t>) -> Result<Var<'t>, WengertError>;

    /// Ids of every learnable parameter of the module.
    fn parameters(&self) -> Vec<ParamId>;
}
