//! # wengert-core
//!
//! Reverse-mode automatic differentiation over dense `f64` tensors, recorded
//! on an explicit Wengert tape.
//!
//! ```
//! use wengert_core::{Tape, Tensor, WengertError};
//!
//! # fn main() -> Result<(), WengertError> {
//! let tape = Tape::new();
//! let x = tape.var(Tensor::new(vec![2.0, 3.0], vec![1, 2])?);
//! let y = tape.var(Tensor::new(vec![4.0, 5.0], vec![1, 2])?);
//! let z = (&x % &y)?.sum()?;
//! z.backward()?;
//! assert_eq!(z.data().item()?, 23.0);
//! assert_eq!(x.grad().to_vec(), vec![4.0, 5.0]);
//! assert_eq!(y.grad().to_vec(), vec![2.0, 3.0]);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod tensor;
pub mod utils;

pub use autograd::{Tape, Var};
pub use error::WengertError;
pub use tensor::Tensor;
