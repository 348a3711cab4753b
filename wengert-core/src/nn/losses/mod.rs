//! Loss functions. Each takes the prediction and the target on the same
//! tape and returns a one-element `Var` ready for `backward_scalar`.

pub mod cross_entropy;
pub mod l1;
pub mod mse;

pub use cross_entropy::cross_entropy;
pub use l1::{l1_loss, mean_error};
pub use mse::mean_squared_error;
