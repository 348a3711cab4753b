use crate::{check_learning_rate, Optimizer};
use wengert_core::nn::ParamStore;
use wengert_core::WengertError;

/// Plain gradient descent.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug, Clone)]
pub struct Gd {
    lr: f64,
}

impl Gd {
    /// # Errors
    /// `InvalidHyperparameter` unless `lr` is finite and positive.
    pub fn new(lr: f64) -> Result<Self, WengertError> {
        check_learning_rate(lr)?;
        Ok(Gd { lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }
}

impl Optimizer for Gd {
    fn step(&mut self, params: &mut ParamStore) -> Result<(), WengertError> {
        let mut updated = 0;
        for (_, param) in params.iter_mut() {
            if let Some(grad) = &param.grad {
                param.value.sub_scaled_assign(grad, self.lr)?;
                updated += 1;
            }
        }
        log::debug!("gd: updated {} parameter(s) with lr={}", updated, self.lr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wengert_core::Tensor;

    fn create_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
        Tensor::new(data, shape).expect("Test tensor creation failed")
    }

    #[test]
    fn test_gd_rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(Gd::new(lr), Err(WengertError::InvalidHyperparameter { .. })));
        }
    }

    #[test]
    fn test_gd_step() -> Result<(), WengertError> {
        let mut store = ParamStore::new();
        let p1 = store.register("p1", create_tensor(vec![1.0, 2.0], vec![2]));
        let p2 = store.register("p2", create_tensor(vec![3.0, 4.0], vec![1, 2]));
        let p3 = store.register("p3", create_tensor(vec![5.0], vec![1]));
        store.get_mut(p1)?.grad = Some(create_tensor(vec![10.0, -20.0], vec![2]));
        store.get_mut(p2)?.grad = Some(create_tensor(vec![0.5, -0.5], vec![1, 2]));

        let mut optim = Gd::new(0.1)?;
        optim.step(&mut store)?;

        assert_relative_eq!(store.get(p1)?.value.data(), [0.0, 4.0].as_slice(), epsilon = 1e-12);
        assert_relative_eq!(store.get(p2)?.value.data(), [2.95, 4.05].as_slice(), epsilon = 1e-12);
        // No gradient, no update.
        assert_eq!(store.get(p3)?.value.data(), &[5.0]);
        Ok(())
    }

    #[test]
    fn test_gd_zero_grad() -> Result<(), WengertError> {
        let mut store = ParamStore::new();
        let p = store.register("p", create_tensor(vec![1.0], vec![1]));
        store.get_mut(p)?.grad = Some(create_tensor(vec![1.0], vec![1]));
        let mut optim = Gd::new(0.5)?;
        optim.zero_grad(&mut store);
        assert!(store.get(p)?.grad.is_none());
        optim.step(&mut store)?;
        assert_eq!(store.get(p)?.value.data(), &[1.0]);
        Ok(())
    }

    #[test]
    fn test_gd_gradient_shape_mismatch() -> Result<(), WengertError> {
        let mut store = ParamStore::new();
        let p = store.register("p", create_tensor(vec![1.0, 2.0], vec![2]));
        store.get_mut(p)?.grad = Some(create_tensor(vec![1.0], vec![1]));
        let mut optim = Gd::new(0.5)?;
        assert!(matches!(optim.step(&mut store), Err(WengertError::ShapeMismatch { .. })));
        Ok(())
    }
}
