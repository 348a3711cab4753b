use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::autograd::Tape;
use crate::utils::testing::{check_tensor_near, create_test_tensor};

#[test]
fn test_add_forward() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]));
    let b = tape.var(create_test_tensor(vec![10.0, 20.0, 30.0], vec![3]));
    let c = add_op(&a, &b)?;
    check_tensor_near(c.data(), &[3], &[11.0, 22.0, 33.0], 1e-12);
    assert_eq!(tape.len(), 3);
    Ok(())
}

#[test]
fn test_add_sum_rule() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]));
    let b = tape.var(create_test_tensor(vec![-1.0, 0.0, 1.0, 2.0], vec![2, 2]));
    add_op(&a, &b)?.backward()?;
    check_tensor_near(&a.grad(), &[2, 2], &[1.0; 4], 1e-12);
    check_tensor_near(&b.grad(), &[2, 2], &[1.0; 4], 1e-12);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), WengertError> {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![3.0], vec![1]));
    add_op(&a, &a)?.backward()?;
    check_tensor_near(&a.grad(), &[1], &[2.0], 1e-12);
    Ok(())
}

#[test]
fn test_add_shape_mismatch_records_nothing() {
    let tape = Tape::new();
    let a = tape.var(create_test_tensor(vec![1.0, 2.0], vec![2]));
    let b = tape.var(create_test_tensor(vec![1.0, 2.0], vec![1, 2]));
    let result = add_op(&a, &b);
    assert!(matches!(result, Err(WengertError::ShapeMismatch { .. })));
    assert_eq!(tape.len(), 2);
}

#[test]
fn test_add_rejects_foreign_tape() {
    let tape_a = Tape::new();
    let tape_b = Tape::new();
    let a = tape_a.var(create_test_tensor(vec![1.0], vec![1]));
    let b = tape_b.var(create_test_tensor(vec![1.0], vec![1]));
    assert_eq!(add_op(&a, &b).map(|v| v.index()), Err(WengertError::TapeMismatch));
    assert_eq!(tape_a.len(), 1);
    assert_eq!(tape_b.len(), 1);
}

#[test]
fn test_add_grad_check() -> Result<(), GradCheckError> {
    let a = create_test_tensor(vec![0.5, -1.5, 2.5], vec![3]);
    let b = create_test_tensor(vec![1.0, 2.0, -3.0], vec![3]);
    check_grad(|_, v| add_op(&v[0], &v[1]), &[a, b], &GradCheckConfig::default())
}
