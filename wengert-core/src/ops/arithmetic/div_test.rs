use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::autograd::Tape;
use crate::utils::testing::{check_tensor_near, create_test_tensor};

#[test]
fn test_div_forward() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![10.0, 20.0], vec![2]));
    let b = tape.var(create_test_tensor(vec![2.0, 5.0], vec![2]));
    check_tensor_near(div_op(&a, &b)?.data(), &[2], &[5.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_div_partials() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![6.0, -3.0], vec![2]));
    let b = tape.var(create_test_tensor(vec![2.0, 4.0], vec![2]));
    div_op(&a, &b)?.backward()?;
    // 1 / b
    check_tensor_near(&a.grad(), &[2], &[0.5, 0.25], 1e-12);
    // -a / b²
    check_tensor_near(&b.grad(), &[2], &[-1.5, 0.1875], 1e-12);
    Ok(())
}

#[test]
fn test_div_by_zero_is_not_an_error() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![1.0, 0.0], vec![2]));
    let b = tape.var(create_test_tensor(vec![0.0, 0.0], vec![2]));
    let c = div_op(&a, &b)?;
    assert!(c.data().data()[0].is_infinite());
    assert!(c.data().data()[1].is_nan());
    Ok(())
}

#[test]
fn test_div_grad_check() -> Result<(), GradCheckError> {
    let a = create_test_tensor(vec![0.5, -1.5, 2.0], vec![3]);
    let b = create_test_tensor(vec![1.0, 2.0, -3.0], vec![3]);
    check_grad(|_, v| div_op(&v[0], &v[1]), &[a, b], &GradCheckConfig::default())
}
