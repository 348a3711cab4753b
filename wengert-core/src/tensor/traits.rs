// src/tensor/traits.rs

use crate::tensor::Tensor;
use approx::{AbsDiffEq, RelativeEq};
use std::fmt::{self, Debug, Display};

impl Debug for Tensor {
    /// Shows the shape and, for small tensors, the elements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={:?}, data=", self.shape)?;
        if self.data.len() <= 16 {
            write!(f, "{:?}", self.data)?;
        } else {
            write!(f, "[... {} elements ...]", self.data.len())?;
        }
        write!(f, ")")
    }
}

impl Display for Tensor {
    /// Prints the tensor row by row along its last axis.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_len = self.shape.last().copied().unwrap_or(1).max(1);
        for row in self.data.chunks(row_len) {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>10.4}", v)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Tensor {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl AbsDiffEq for Tensor {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Tensor {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
