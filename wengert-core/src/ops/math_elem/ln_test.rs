use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::autograd::Tape;
use crate::utils::testing::{check_tensor_near, create_test_tensor};

#[test]
fn test_ln() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![1.0, std::f64::consts::E, 4.0], vec![3]));
    let b = ln_op(&a)?;
    check_tensor_near(b.data(), &[3], &[0.0, 1.0, 4.0f64.ln()], 1e-12);
    b.backward()?;
    check_tensor_near(&a.grad(), &[3], &[1.0, 1.0 / std::f64::consts::E, 0.25], 1e-12);
    Ok(())
}

#[test]
fn test_ln_out_of_domain() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![0.0, -1.0], vec![2]));
    let b = ln_op(&a)?;
    assert_eq!(b.data().data()[0], f64::NEG_INFINITY);
    assert!(b.data().data()[1].is_nan());
    Ok(())
}

#[test]
fn test_ln_grad_check() -> Result<(), GradCheckError> {
    let a = create_test_tensor(vec![0.5, 1.5, 3.0], vec![3]);
    check_grad(|_, v| ln_op(&v[0]), &[a], &GradCheckConfig::default())
}
