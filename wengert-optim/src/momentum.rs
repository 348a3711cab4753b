use crate::{check_learning_rate, Optimizer};
use std::collections::HashMap;
use wengert_core::nn::{ParamId, ParamStore};
use wengert_core::tensor::zeros_like;
use wengert_core::{Tensor, WengertError};

/// Gradient descent with momentum.
///
/// Keeps one velocity buffer `m` per parameter, created (as zeros) the first
/// time the parameter has a gradient:
/// `m = momentum * m + lr * grad(p)`
/// `p = p - m`
#[derive(Debug, Clone)]
pub struct Momentum {
    lr: f64,
    momentum: f64,
    velocity: HashMap<ParamId, Tensor>,
}

impl Momentum {
    /// # Errors
    /// `InvalidHyperparameter` unless `lr` is finite and positive and
    /// `momentum` lies in `[0, 1)`.
    pub fn new(lr: f64, momentum: f64) -> Result<Self, WengertError> {
        check_learning_rate(lr)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(WengertError::InvalidHyperparameter {
                name: "momentum".to_string(),
                value: momentum,
            });
        }
        Ok(Momentum {
            lr,
            momentum,
            velocity: HashMap::new(),
        })
    }

    /// Velocity buffer of `id`, if it has been created.
    pub fn velocity(&self, id: ParamId) -> Option<&Tensor> {
        self.velocity.get(&id)
    }
}

impl Optimizer for Momentum {
    fn step(&mut self, params: &mut ParamStore) -> Result<(), WengertError> {
        for (id, param) in params.iter_mut() {
            let Some(grad) = &param.grad else {
                continue;
            };
            let m = self.velocity.entry(id).or_insert_with(|| zeros_like(grad));
            let mut next = m.scale(self.momentum);
            next.add_assign_checked(&grad.scale(self.lr))?;
            param.value.sub_scaled_assign(&next, 1.0)?;
            *m = next;
        }
        log::debug!("momentum: step with lr={} momentum={}", self.lr, self.momentum);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
        Tensor::new(data, shape).expect("Test tensor creation failed")
    }

    #[test]
    fn test_momentum_validation() {
        assert!(Momentum::new(0.1, 0.9).is_ok());
        assert!(Momentum::new(0.1, 0.0).is_ok());
        assert!(matches!(Momentum::new(0.1, 1.0), Err(WengertError::InvalidHyperparameter { .. })));
        assert!(matches!(Momentum::new(0.1, -0.1), Err(WengertError::InvalidHyperparameter { .. })));
        assert!(matches!(Momentum::new(0.0, 0.5), Err(WengertError::InvalidHyperparameter { .. })));
    }

    #[test]
    fn test_momentum_accumulates_velocity() -> Result<(), WengertError> {
        let mut store = ParamStore::new();
        let p = store.register("p", create_tensor(vec![1.0, -1.0], vec![2]));
        store.get_mut(p)?.grad = Some(create_tensor(vec![1.0, 2.0], vec![2]));
        let mut optim = Momentum::new(0.1, 0.5)?;
        assert!(optim.velocity(p).is_none());

        // m1 = 0.1 g, p1 = p0 - m1
        optim.step(&mut store)?;
        assert_relative_eq!(store.get(p)?.value.data(), [0.9, -1.2].as_slice(), epsilon = 1e-12);

        // m2 = 0.5 m1 + 0.1 g = 0.15 g, p2 = p1 - m2
        optim.step(&mut store)?;
        let velocity = optim.velocity(p).map(|m| m.to_vec()).unwrap_or_default();
        assert_relative_eq!(velocity.as_slice(), [0.15, 0.3].as_slice(), epsilon = 1e-12);
        assert_relative_eq!(store.get(p)?.value.data(), [0.75, -1.5].as_slice(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_momentum_skips_parameters_without_gradient() -> Result<(), WengertError> {
        let mut store = ParamStore::new();
        let p = store.register("p", create_tensor(vec![2.0], vec![1]));
        let mut optim = Momentum::new(0.1, 0.9)?;
        optim.step(&mut store)?;
        assert_eq!(store.get(p)?.value.data(), &[2.0]);
        assert!(optim.velocity(p).is_none());
        Ok(())
    }

    #[test]
    fn test_zero_momentum_matches_gradient_descent() -> Result<(), WengertError> {
        let mut store = ParamStore::new();
        let p = store.register("p", create_tensor(vec![1.0, 2.0], vec![2]));
        store.get_mut(p)?.grad = Some(create_tensor(vec![4.0, -4.0], vec![2]));
        let mut optim = Momentum::new(0.25, 0.0)?;
        optim.step(&mut store)?;
        optim.step(&mut store)?;
        assert_relative_eq!(store.get(p)?.value.data(), [-1.0, 4.0].as_slice(), epsilon = 1e-12);
        Ok(())
    }
}
