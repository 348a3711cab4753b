//! Trainable parameters, layers and loss functions built on the tape.
//!
//! Parameters live in a [`ParamStore`] that outlives any single tape. For
//! each forward pass the store is bound to a fresh [`Tape`](crate::autograd::Tape)
//! with [`ParamStore::bind`], which records every parameter as a leaf; after
//! the backward sweep [`ParamStore::collect_grads`] copies the leaf gradients
//! back so an optimizer can update the values.

pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use layers::linear::Linear;
pub use losses::{cross_entropy, l1_loss, mean_error, mean_squared_error};
pub use module::Module;
pub use parameter::{Bindings, ParamId, ParamStore, Parameter};
