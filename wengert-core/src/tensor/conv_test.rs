use crate::error::WengertError;
use crate::tensor::ones;
use crate::utils::testing::{check_tensor_near, create_test_tensor};

#[test]
fn test_conv1d_identity_kernel() -> Result<(), WengertError> {
    let x = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![1, 4]);
    let delta = create_test_tensor(vec![1.0, 0.0, 0.0, 0.0], vec![1, 4]);
    check_tensor_near(&x.conv1d(&delta)?, &[1, 4], &[1.0, 2.0, 3.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_conv1d_shift_kernel_wraps_around() -> Result<(), WengertError> {
    let x = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![1, 4]);
    let shift = create_test_tensor(vec![0.0, 1.0, 0.0, 0.0], vec![1, 4]);
    check_tensor_near(&x.conv1d(&shift)?, &[1, 4], &[4.0, 1.0, 2.0, 3.0], 1e-12);
    Ok(())
}

#[test]
fn test_conv1d_with_ones_sums_signal() -> Result<(), WengertError> {
    let x = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
    let k = ones(&[3]);
    check_tensor_near(&x.conv1d(&k)?, &[3], &[6.0, 6.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_conv1d_rows_are_independent() -> Result<(), WengertError> {
    let x = create_test_tensor(vec![1.0, 2.0, 10.0, 20.0], vec![2, 2]);
    let k = create_test_tensor(vec![1.0, 0.0, 0.0, 1.0], vec![2, 2]);
    check_tensor_near(&x.conv1d(&k)?, &[2, 2], &[1.0, 2.0, 20.0, 10.0], 1e-12);
    Ok(())
}

#[test]
fn test_conv1d_shape_mismatch() {
    let x = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
    let k = create_test_tensor(vec![1.0, 2.0], vec![2]);
    assert!(matches!(x.conv1d(&k), Err(WengertError::ShapeMismatch { .. })));
}
