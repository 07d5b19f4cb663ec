use std::ops::{Add, Div, Mul, Sub};

use num_traits::{Float, Zero};
use viennacv_tensor::{Tensor, TensorView, TensorViewMut};

use crate::error::TensorOpsError;
use crate::kernels::{axpy_kernel, zip_assign_kernel};

fn check_shape<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<(), TensorOpsError> {
    if a.shape != b.shape {
        return Err(TensorOpsError::ShapeMismatch(
            a.shape.to_vec(),
            b.shape.to_vec(),
        ));
    }
    Ok(())
}

fn binary_op<T, const N: usize, F>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
    op: F,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    check_shape(a, b)?;
    Ok(a.element_wise_op(b, |&x, &y| op(x, y))?)
}

/// Elementwise sum of two tensors of the same shape.
///
/// # Errors
///
/// If the shapes of the tensors don't match, an error is returned.
///
/// # Example
///
/// ```
/// use viennacv_tensor::Tensor2;
/// use viennacv_tensor_ops::ops::add;
///
/// let a = Tensor2::<i32>::from_shape_vec([1, 3], vec![1, 2, 3]).unwrap();
/// let b = Tensor2::<i32>::from_shape_vec([1, 3], vec![4, 5, 6]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().as_slice(), &[5, 7, 9]);
/// ```
pub fn add<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Copy + Add<Output = T>,
{
    binary_op(a, b, |x, y| x + y)
}

/// Elementwise difference `a - b` of two tensors of the same shape.
///
/// # Errors
///
/// If the shapes of the tensors don't match, an error is returned.
pub fn sub<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Copy + Sub<Output = T>,
{
    binary_op(a, b, |x, y| x - y)
}

/// Elementwise (Hadamard) product of two tensors of the same shape.
///
/// # Errors
///
/// If the shapes of the tensors don't match, an error is returned.
pub fn mul<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Copy + Mul<Output = T>,
{
    binary_op(a, b, |x, y| x * y)
}

/// Elementwise quotient `a / b` of two tensors of the same shape.
///
/// # Errors
///
/// If the shapes of the tensors don't match, an error is returned.
pub fn div<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Copy + Div<Output = T>,
{
    binary_op(a, b, |x, y| x / y)
}

/// Multiply every element by a scalar.
pub fn mul_scalar<T, const N: usize>(tensor: &Tensor<T, N>, n: T) -> Tensor<T, N>
where
    T: Float,
{
    tensor.map(|&x| x * n)
}

/// Divide every element by a scalar.
pub fn div_scalar<T, const N: usize>(tensor: &Tensor<T, N>, n: T) -> Tensor<T, N>
where
    T: Float,
{
    tensor.map(|&x| x / n)
}

/// Elementwise natural exponential.
pub fn exp<T, const N: usize>(tensor: &Tensor<T, N>) -> Tensor<T, N>
where
    T: Float,
{
    tensor.map(|x| x.exp())
}

/// Add `src` into `dst` elementwise.
///
/// # Errors
///
/// If the shapes of the tensors don't match, an error is returned.
pub fn add_inplace<T, const N: usize>(
    dst: &mut Tensor<T, N>,
    src: &Tensor<T, N>,
) -> Result<(), TensorOpsError>
where
    T: Copy + Add<Output = T>,
{
    check_shape(dst, src)?;
    zip_assign_kernel(dst.as_slice_mut(), src.as_slice(), |d, s| d + s)
}

/// Accumulate `dst += alpha * src` over two matrix views of the same shape.
///
/// The views may address sub-rectangles of larger matrices; only the
/// elements visible through `dst` are written.
///
/// # Errors
///
/// If the shapes of the views don't match, an error is returned.
///
/// # Example
///
/// ```
/// use viennacv_tensor::Tensor2;
/// use viennacv_tensor_ops::ops::scaled_add_inplace;
///
/// let src = Tensor2::<f32>::from_shape_val([3, 3], 1.0);
/// let mut dst = Tensor2::<f32>::zeros([3, 3]);
/// {
///     let mut window = dst.slice_mut(1..3, 1..3).unwrap();
///     scaled_add_inplace(&mut window, &src.slice(0..2, 0..2).unwrap(), 2.0).unwrap();
/// }
/// assert_eq!(dst.as_slice(), &[0.0, 0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 2.0, 2.0]);
/// ```
pub fn scaled_add_inplace<T>(
    dst: &mut TensorViewMut<'_, T>,
    src: &TensorView<'_, T>,
    alpha: T,
) -> Result<(), TensorOpsError>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    if dst.shape != src.shape {
        return Err(TensorOpsError::ShapeMismatch(
            dst.shape.to_vec(),
            src.shape.to_vec(),
        ));
    }
    for r in 0..src.rows() {
        axpy_kernel(dst.row_mut(r)?, src.row(r)?, alpha)?;
    }
    Ok(())
}

/// Sum of every element of the tensor.
///
/// # Example
///
/// ```
/// use viennacv_tensor::Tensor2;
/// use viennacv_tensor_ops::ops::sum;
///
/// let t = Tensor2::<u8>::from_shape_val([2, 3], 1);
/// assert_eq!(sum(&t), 6);
/// ```
pub fn sum<T, const N: usize>(tensor: &Tensor<T, N>) -> T
where
    T: Zero + Copy,
{
    tensor.iter().fold(T::zero(), |acc, &x| acc + x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use viennacv_tensor::Tensor2;

    #[test]
    fn test_binary_ops() -> Result<(), TensorOpsError> {
        let a = Tensor2::<f32>::from_shape_vec([2, 2], vec![2.0, 4.0, 6.0, 8.0])?;
        let b = Tensor2::<f32>::from_shape_vec([2, 2], vec![1.0, 2.0, 3.0, 4.0])?;

        assert_eq!(sub(&a, &b)?.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(mul(&a, &b)?.as_slice(), &[2.0, 8.0, 18.0, 32.0]);
        assert_eq!(div(&a, &b)?.as_slice(), &[2.0, 2.0, 2.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_binary_shape_mismatch() -> Result<(), TensorOpsError> {
        let a = Tensor2::<i32>::zeros([2, 3]);
        let b = Tensor2::<i32>::zeros([3, 2]);
        assert_eq!(
            add(&a, &b),
            Err(TensorOpsError::ShapeMismatch(vec![2, 3], vec![3, 2]))
        );
        Ok(())
    }

    #[test]
    fn test_scalar_and_exp() -> Result<(), TensorOpsError> {
        let t = Tensor::<f64, 1>::from_shape_vec([3], vec![0.0, 1.0, 2.0])?;
        assert_eq!(mul_scalar(&t, 3.0).as_slice(), &[0.0, 3.0, 6.0]);
        assert_eq!(div_scalar(&t, 2.0).as_slice(), &[0.0, 0.5, 1.0]);

        let e = exp(&t);
        assert_relative_eq!(e.as_slice()[0], 1.0);
        assert_relative_eq!(e.as_slice()[1], std::f64::consts::E, epsilon = 1e-12);
        assert_relative_eq!(sum(&t), 3.0);
        Ok(())
    }

    #[test]
    fn test_add_inplace() -> Result<(), TensorOpsError> {
        let mut a = Tensor2::<u16>::from_shape_val([2, 2], 1);
        let b = Tensor2::<u16>::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        add_inplace(&mut a, &b)?;
        assert_eq!(a.as_slice(), &[2, 3, 4, 5]);

        let c = Tensor2::<u16>::zeros([1, 4]);
        assert!(add_inplace(&mut a, &c).is_err());
        Ok(())
    }

    #[test]
    fn test_scaled_add_inplace_windows() -> Result<(), TensorOpsError> {
        let src = Tensor2::<f32>::from_shape_fn([3, 3], |[i, j]| (i * 3 + j) as f32);
        let mut dst = Tensor2::<f32>::zeros([3, 3]);

        // shift the source one column to the right
        let mut window = dst.slice_mut(0..3, 1..3)?;
        scaled_add_inplace(&mut window, &src.slice(0..3, 0..2)?, 1.0)?;
        assert_eq!(
            dst.as_slice(),
            &[0.0, 0.0, 1.0, 0.0, 3.0, 4.0, 0.0, 6.0, 7.0]
        );
        Ok(())
    }

    #[test]
    fn test_scaled_add_inplace_mismatch() -> Result<(), TensorOpsError> {
        let src = Tensor2::<f32>::zeros([2, 2]);
        let mut dst = Tensor2::<f32>::zeros([2, 2]);
        let mut window = dst.slice_mut(0..1, 0..2)?;
        let res = scaled_add_inplace(&mut window, &src.view(), 1.0);
        assert_eq!(
            res,
            Err(TensorOpsError::ShapeMismatch(vec![1, 2], vec![2, 2]))
        );
        Ok(())
    }
}
