use std::ops::{Add, Mul};

use crate::error::TensorOpsError;

fn check_len<T>(a: &[T], b: &[T]) -> Result<(), TensorOpsError> {
    if a.len() != b.len() {
        return Err(TensorOpsError::ShapeMismatch(vec![a.len()], vec![b.len()]));
    }
    Ok(())
}

/// Compute `dst[i] = dst[i] + alpha * src[i]` over two slices of equal length.
///
/// # Errors
///
/// If the slices have different lengths, an error is returned.
pub fn axpy_kernel<T>(dst: &mut [T], src: &[T], alpha: T) -> Result<(), TensorOpsError>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    check_len(dst, src)?;
    dst.iter_mut()
        .zip(src.iter())
        .for_each(|(d, &s)| *d = *d + alpha * s);
    Ok(())
}

/// Compute `dst[i] = op(dst[i], src[i])` over two slices of equal length.
///
/// # Errors
///
/// If the slices have different lengths, an error is returned.
pub fn zip_assign_kernel<T, F>(dst: &mut [T], src: &[T], op: F) -> Result<(), TensorOpsError>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    check_len(dst, src)?;
    dst.iter_mut()
        .zip(src.iter())
        .for_each(|(d, &s)| *d = op(*d, s));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axpy_kernel() -> Result<(), TensorOpsError> {
        let mut dst = [1.0f32, 2.0, 3.0];
        axpy_kernel(&mut dst, &[1.0, 1.0, 2.0], 2.0)?;
        assert_eq!(dst, [3.0, 4.0, 7.0]);
        Ok(())
    }

    #[test]
    fn test_kernel_length_mismatch() {
        let mut dst = [0i32; 2];
        let res = zip_assign_kernel(&mut dst, &[1, 2, 3], |a, b| a + b);
        assert_eq!(res, Err(TensorOpsError::ShapeMismatch(vec![2], vec![3])));
    }
}
