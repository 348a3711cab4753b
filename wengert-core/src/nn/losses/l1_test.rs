use super::*;
use crate::autograd::Tape;
use crate::utils::testing::{check_tensor_near, create_test_tensor};

#[test]
fn test_l1_loss() -> Result<(), WengertError> {
    let tape = Tape::new();
    let input = tape.var(create_test_tensor(vec![1.0, 5.0, -2.0], vec![3]));
    let target = tape.var(create_test_tensor(vec![2.0, 3.0, -2.0], vec![3]));
    let loss = l1_loss(&input, &target)?;
    check_tensor_near(loss.data(), &[1], &[3.0], 1e-12);
    loss.backward_scalar()?;
    check_tensor_near(&input.grad(), &[3], &[1.0, 1.0, 1.0], 1e-12);
    check_tensor_near(&target.grad(), &[3], &[-1.0, -1.0, -1.0], 1e-12);
    Ok(())
}

#[test]
fn test_mean_error() -> Result<(), WengertError> {
    let tape = Tape::new();
    let input = tape.var(create_test_tensor(vec![1.0, 5.0, -2.0, 0.0], vec![2, 2]));
    let target = tape.var(create_test_tensor(vec![2.0, 3.0, -2.0, 1.0], vec![2, 2]));
    let loss = mean_error(&input, &target)?;
    check_tensor_near(loss.data(), &[1], &[1.0], 1e-12);
    loss.backward_scalar()?;
    check_tensor_near(&input.grad(), &[2, 2], &[0.25; 4], 1e-12);
    Ok(())
}
