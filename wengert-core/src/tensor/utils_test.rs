use super::*;

#[test]
fn test_calculate_strides() {
    assert_eq!(calculate_strides(&[2, 3]), vec![3, 1]);
    assert_eq!(calculate_strides(&[2, 2, 2]), vec![4, 2, 1]);
    assert_eq!(calculate_strides(&[5]), vec![1]);
    assert!(calculate_strides(&[]).is_empty());
}

#[test]
fn test_offset_of() {
    assert_eq!(offset_of(&[1, 2], &[2, 3]), Some(5));
    assert_eq!(offset_of(&[0, 0, 1], &[2, 2, 2]), Some(1));
    assert_eq!(offset_of(&[2, 0], &[2, 3]), None);
    assert_eq!(offset_of(&[0], &[2, 3]), None);
}

#[test]
fn test_matrix_dims() {
    assert_eq!(matrix_dims(&[2, 3]), Some((1, 2, 3)));
    assert_eq!(matrix_dims(&[4, 2, 3]), Some((4, 2, 3)));
    assert_eq!(matrix_dims(&[3]), None);
}
