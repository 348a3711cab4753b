pub mod sum;

pub use sum::{abs_sum_op, sum_op};
