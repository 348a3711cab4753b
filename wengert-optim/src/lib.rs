//! Gradient-based optimizers for parameters held in a
//! [`ParamStore`](wengert_core::nn::ParamStore).
//!
//! A training step is: bind the store to a fresh tape, record the forward
//! pass, sweep backward from the loss, `collect_grads`, then `step`.

use wengert_core::nn::ParamStore;
use wengert_core::WengertError;

pub mod gd;
pub mod momentum;

pub use gd::Gd;
pub use momentum::Momentum;

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// Parameters whose gradient is `None` are left unchanged.
    fn step(&mut self, params: &mut ParamStore) -> Result<(), WengertError>;

    /// Clears the gradients of all parameters.
    fn zero_grad(&mut self, params: &mut ParamStore) {
        params.zero_grad();
    }
}

pub(crate) fn check_learning_rate(lr: f64) -> Result<(), WengertError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(WengertError::InvalidHyperparameter {
            name: "lr".to_string(),
            value: lr,
        });
    }
    Ok(())
}
