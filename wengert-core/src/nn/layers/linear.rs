use crate::autograd::Var;
use crate::error::WengertError;
use crate::nn::module::Module;
use crate::nn::parameter::{Bindings, ParamId, ParamStore};
use crate::ops::{add_op, matmul_op};
use crate::tensor::randn_with_rng;
use rand::Rng;

/// Fully connected layer: `y = x · W + b`.
///
/// `W` has shape `(in_features, out_features)` and `b` shape `(1, out_features)`;
/// inputs are row vectors of shape `(1, in_features)`.
#[derive(Debug, Clone)]
pub struct Linear {
    weight: ParamId,
    bias: ParamId,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Registers `{name}.weight` and `{name}.bias` in `store`, both drawn from
    /// a normal distribution with standard deviation `1/√in_features`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if either feature count is zero.
    pub fn new<R: Rng + ?Sized>(
        store: &mut ParamStore,
        name: &str,
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, WengertError> {
        for (field, value) in [("in_features", in_features), ("out_features", out_features)] {
            if value == 0 {
                return Err(WengertError::InvalidHyperparameter {
                    name: field.to_string(),
                    value: 0.0,
                });
            }
        }
        let std_dev = 1.0 / (in_features as f64).sqrt();
        let weight_value = randn_with_rng(&[in_features, out_features], 0.0, std_dev, rng)?;
        let bias_value = randn_with_rng(&[1, out_features], 0.0, std_dev, rng)?;
        let weight = store.register(format!("{}.weight", name), weight_value);
        let bias = store.register(format!("{}.bias", name), bias_value);
        Ok(Linear {
            weight,
            bias,
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> ParamId {
        self.weight
    }

    pub fn bias(&self) -> ParamId {
        self.bias
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward<'t>(&self, bindings: &Bindings<'t>, input: &Var<'t>) -> Result<Var<'t>, WengertError> {
        let product = matmul_op(input, bindings.var(self.weight)?)?;
        add_op(&product, bindings.var(self.bias)?)
    }

    fn parameters(&self) -> Vec<ParamId> {
        vec![self.weight, self.bias]
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
