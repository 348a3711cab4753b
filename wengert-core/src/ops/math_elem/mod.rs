//! Element-wise transcendental functions. Each records a unary element-wise
//! node whose weight is the analytic derivative evaluated at the input.
//! Out-of-domain inputs produce NaN or infinities, never errors.

pub mod exp;
pub mod ln;
pub mod sqrt;
pub mod trig;

pub use exp::exp_op;
pub use ln::ln_op;
pub use sqrt::sqrt_op;
pub use trig::{acos_op, asin_op, atan_op, cos_op, sin_op, tan_op};
