use crate::autograd::{Tape, Var};
use crate::error::WengertError;
use crate::tensor::Tensor;
use std::fmt;

/// Handle to a parameter registered in a [`ParamStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(usize);

impl ParamId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named learnable tensor together with its most recently collected gradient.
#[derive(Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Tensor,
    /// `None` until a gradient has been collected, and again after `zero_grad`.
    pub grad: Option<Tensor>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Tensor) -> Self {
        Parameter {
            name: name.into(),
            value,
            grad: None,
        }
    }

    pub fn zero_grad(&mut self) {
        self.grad = None;
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({}, {:?}, has_grad={})", self.name, self.value, self.grad.is_some())
    }
}

/// Owns every learnable parameter of a model across forward passes.
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    params: Vec<Parameter>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, value: Tensor) -> ParamId {
        let id = ParamId(self.params.len());
        let param = Parameter::new(name, value);
        log::trace!("params: registered {} as {:?} with shape {:?}", param.name, id, param.value.shape());
        self.params.push(param);
        id
    }

    pub fn get(&self, id: ParamId) -> Result<&Parameter, WengertError> {
        self.params.get(id.0).ok_or(WengertError::UnknownParameter(id.0))
    }

    pub fn get_mut(&mut self, id: ParamId) -> Result<&mut Parameter, WengertError> {
        self.params.get_mut(id.0).ok_or(WengertError::UnknownParameter(id.0))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &Parameter)> {
        self.params.iter().enumerate().map(|(i, p)| (ParamId(i), p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParamId, &mut Parameter)> {
        self.params.iter_mut().enumerate().map(|(i, p)| (ParamId(i), p))
    }

    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    /// Records every parameter's current value as a leaf on `tape`.
    pub fn bind<'t>(&self, tape: &'t Tape) -> Bindings<'t> {
        let vars = self.params.iter().map(|p| tape.var(p.value.clone())).collect();
        Bindings { vars }
    }

    /// Copies the gradient of every bound leaf into its parameter.
    ///
    /// # Errors
    /// `UnknownParameter` if `bindings` does not hold exactly one entry per
    /// parameter, i.e. it came from another store or predates a `register`.
    pub fn collect_grads(&mut self, bindings: &Bindings<'_>) -> Result<(), WengertError> {
        if bindings.len() != self.params.len() {
            return Err(WengertError::UnknownParameter(bindings.len().min(self.params.len())));
        }
        for (param, var) in self.params.iter_mut().zip(bindings.vars.iter()) {
            param.grad = Some(var.grad());
        }
        log::debug!("params: collected {} gradient(s)", bindings.len());
        Ok(())
    }

    pub fn zero_grad(&mut self) {
        self.params.iter_mut().for_each(Parameter::zero_grad);
    }
}

/// The leaves a [`ParamStore`] recorded on one tape, indexed by [`ParamId`].
#[derive(Debug, Clone)]
pub struct Bindings<'t> {
    vars: Vec<Var<'t>>,
}

impl<'t> Bindings<'t> {
    pub fn var(&self, id: ParamId) -> Result<&Var<'t>, WengertError> {
        self.vars.get(id.0).ok_or(WengertError::UnknownParameter(id.0))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
