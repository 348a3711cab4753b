/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Flat row-major offset of `coords` inside `shape`, or `None` if the
/// coordinates have the wrong rank or fall outside the shape.
pub fn offset_of(coords: &[usize], shape: &[usize]) -> Option<usize> {
    if coords.len() != shape.len() {
        return None;
    }
    let strides = calculate_strides(shape);
    let mut offset = 0;
    for ((&c, &dim), &stride) in coords.iter().zip(shape.iter()).zip(strides.iter()) {
        if c >= dim {
            return None;
        }
        offset += c * stride;
    }
    Some(offset)
}

/// Splits a shape of rank >= 2 into (batch count, rows, cols).
pub(crate) fn matrix_dims(shape: &[usize]) -> Option<(usize, usize, usize)> {
    let rank = shape.len();
    if rank < 2 {
        return None;
    }
    let batch: usize = shape[..rank - 2].iter().product();
    Some((batch, shape[rank - 2], shape[rank - 1]))
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
