use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::autograd::Tape;
use crate::utils::testing::{check_tensor_near, create_test_tensor};

#[test]
fn test_cross_entropy_one_hot() -> Result<(), WengertError> {
    let tape = Tape::new();
    let probs = tape.var(create_test_tensor(vec![0.2, 0.5, 0.3], vec![1, 3]));
    let target = tape.var(create_test_tensor(vec![0.0, 1.0, 0.0], vec![1, 3]));
    let loss = cross_entropy(&probs, &target)?;
    check_tensor_near(loss.data(), &[1], &[-(0.5f64.ln())], 1e-12);
    loss.backward_scalar()?;
    // -t / p
    check_tensor_near(&probs.grad(), &[1, 3], &[0.0, -2.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_cross_entropy_zero_probability_is_infinite() -> Result<(), WengertError> {
    let tape = Tape::new();
    let probs = tape.var(create_test_tensor(vec![0.0, 1.0], vec![2]));
    let target = tape.var(create_test_tensor(vec![1.0, 0.0], vec![2]));
    let loss = cross_entropy(&probs, &target)?;
    assert_eq!(loss.data().data()[0], f64::INFINITY);
    Ok(())
}

#[test]
fn test_cross_entropy_grad_check() -> Result<(), GradCheckError> {
    let probs = create_test_tensor(vec![0.1, 0.6, 0.3], vec![3]);
    let target = create_test_tensor(vec![0.2, 0.7, 0.1], vec![3]);
    check_grad(|_, v| cross_entropy(&v[0], &v[1]), &[probs, target], &GradCheckConfig::default())
}
