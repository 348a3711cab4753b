//! Element-wise arithmetic. Binary operations require operands of identical
//! shape; there is no broadcasting.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::hadamard_op;
pub use neg::{neg_op, scale_op};
pub use pow::{pow_op, powf_op};
pub use sub::sub_op;
