use crate::autograd::tape::Tape;
use crate::autograd::var::Var;
use crate::error::WengertError;
use crate::tensor::Tensor;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical:?} != numerical {numerical:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error("Numerical gradient is not finite for input {input_index}, element {element_index} (f+ = {value_plus:?}, f- = {value_minus:?})")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfig(String),
    #[error("Tensor error during gradient check: {0}")]
    TensorError(WengertError),
}

impl From<WengertError> for GradCheckError {
    fn from(err: WengertError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Step and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Finite-difference step.
    pub epsilon: f64,
    /// Used as both the absolute and the relative tolerance.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a computation from leaf `Var`s recorded on the tape it is
/// given. The checked quantity is the sum of the elements of its output,
/// which is exactly what a backward sweep seeded with ones differentiates.
/// Every evaluation, analytic or numeric, runs on its own fresh tape.
pub fn check_grad<F>(func: F, inputs: &[Tensor], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: for<'t> Fn(&'t Tape, &[Var<'t>]) -> Result<Var<'t>, WengertError>,
{
    if !(config.epsilon.is_finite() && config.epsilon > 0.0) {
        return Err(GradCheckError::InvalidConfig(format!("epsilon must be positive, got {}", config.epsilon)));
    }
    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(GradCheckError::InvalidConfig(format!("tolerance must be positive, got {}", config.tolerance)));
    }

    let analytical = analytical_grads(&func, inputs)?;

    for (input_index, input) in inputs.iter().enumerate() {
        for element_index in 0..input.numel() {
            let value_plus = evaluate_perturbed(&func, inputs, input_index, element_index, config.epsilon)?;
            let value_minus = evaluate_perturbed(&func, inputs, input_index, element_index, -config.epsilon)?;
            let numerical = (value_plus - value_minus) / (2.0 * config.epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index,
                    element_index,
                    value_plus,
                    value_minus,
                });
            }

            let analytic = analytical[input_index].data()[element_index];
            if !relative_eq!(analytic, numerical, epsilon = config.tolerance, max_relative = config.tolerance) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical: analytic,
                    numerical,
                    difference: (analytic - numerical).abs(),
                });
            }
        }
    }
    log::debug!("grad_check: {} input(s) agree with finite differences", inputs.len());
    Ok(())
}

fn analytical_grads<F>(func: &F, inputs: &[Tensor]) -> Result<Vec<Tensor>, WengertError>
where
    F: for<'t> Fn(&'t Tape, &[Var<'t>]) -> Result<Var<'t>, WengertError>,
{
    let tape = Tape::new();
    let vars: Vec<Var<'_>> = inputs.iter().map(|t| tape.var(t.clone())).collect();
    let output = func(&tape, &vars)?;
    output.backward()?;
    Ok(vars.iter().map(Var::grad).collect())
}

fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    element_index: usize,
    delta: f64,
) -> Result<f64, WengertError>
where
    F: for<'t> Fn(&'t Tape, &[Var<'t>]) -> Result<Var<'t>, WengertError>,
{
    let tape = Tape::new();
    let vars: Vec<Var<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut data = t.clone();
            if i == input_index {
                data.data[element_index] += delta;
            }
            tape.var(data)
        })
        .collect();
    let output = func(&tape, &vars)?;
    Ok(output.data().iter().sum())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
