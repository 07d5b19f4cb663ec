use log::debug;
use num_traits::Float;
use viennacv_tensor::Tensor2;
use viennacv_tensor_ops::ops;

use crate::config::Direction;
use crate::error::ImgprocError;

/// Largest Gaussian kernel extent along one axis.
pub const MAX_GAUSSIAN_KERNEL_SIZE: usize = 51;

const SOBEL_X_ROI: [(usize, usize); 6] = [(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)];
const SOBEL_Y_ROI: [(usize, usize); 6] = [(0, 0), (0, 1), (0, 2), (2, 0), (2, 1), (2, 2)];

fn cast<T: Float>(value: f64) -> Result<T, ImgprocError> {
    T::from(value).ok_or(ImgprocError::CastError)
}

/// Create a 3x3 sobel kernel.
///
/// # Arguments
///
/// * `direction` - The gradient direction.
///
/// # Errors
///
/// [`Direction::Upright`] has no kernel and is reported as unsupported.
///
/// # Example
///
/// ```
/// use viennacv_imgproc::{filter::kernels::sobel_kernel3, Direction};
///
/// let kernel = sobel_kernel3::<f32>(Direction::X).unwrap();
/// assert_eq!(kernel.to_nested()[1], vec![-2.0, 0.0, 2.0]);
/// ```
pub fn sobel_kernel3<T: Float>(direction: Direction) -> Result<Tensor2<T>, ImgprocError> {
    let host: [[f64; 3]; 3] = match direction {
        Direction::X => [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]],
        Direction::Y => [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]],
        Direction::Upright => {
            return Err(ImgprocError::unsupported(
                "sobel",
                format!("direction {direction}"),
            ))
        }
    };
    let nested = host
        .iter()
        .map(|row| row.iter().map(|&v| cast(v)).collect::<Result<Vec<T>, _>>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Tensor2::from_nested(&nested)?)
}

/// The taps of the 3x3 sobel kernel that carry a non-zero weight.
///
/// # Errors
///
/// [`Direction::Upright`] has no kernel and is reported as unsupported.
pub fn sobel_roi3(direction: Direction) -> Result<&'static [(usize, usize)], ImgprocError> {
    match direction {
        Direction::X => Ok(&SOBEL_X_ROI),
        Direction::Y => Ok(&SOBEL_Y_ROI),
        Direction::Upright => Err(ImgprocError::unsupported(
            "sobel",
            format!("direction {direction}"),
        )),
    }
}

/// Gaussian kernel extent along an axis of `dim` pixels.
///
/// Covers `±dim` taps, capped at [`MAX_GAUSSIAN_KERNEL_SIZE`].
///
/// # Example
///
/// ```
/// use viennacv_imgproc::filter::kernels::gaussian_kernel_size;
///
/// assert_eq!(gaussian_kernel_size(4), 9);
/// assert_eq!(gaussian_kernel_size(640), 51);
/// ```
pub fn gaussian_kernel_size(dim: usize) -> usize {
    dim.saturating_mul(2)
        .saturating_add(1)
        .min(MAX_GAUSSIAN_KERNEL_SIZE)
}

/// Fill a kernel with the 2D Gaussian `exp(-(x² + y²) / 2σ²) / 2πσ²`.
///
/// The kernel is centered on its middle cell, with `x` growing along the
/// columns and `y` growing towards the first row.
///
/// # Errors
///
/// Fails when the kernel is not odd × odd or `sigma` is not finite and positive.
pub fn gaussian_kernel_2d_into<T: Float>(
    kernel: &mut Tensor2<T>,
    sigma: T,
) -> Result<(), ImgprocError> {
    let [rows, cols] = kernel.shape;
    if rows % 2 == 0 || cols % 2 == 0 {
        return Err(ImgprocError::InvalidKernelGeometry(rows, cols));
    }
    if !sigma.is_finite() || sigma <= T::zero() {
        return Err(ImgprocError::InvalidSigma(
            sigma.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let half1 = ((rows - 1) / 2) as f64;
    let half2 = ((cols - 1) / 2) as f64;

    // coordinate grids
    let xs_host = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|j| cast::<T>(j as f64 - half2))
                .collect::<Result<Vec<T>, _>>()
        })
        .collect::<Result<Vec<Vec<T>>, _>>()?;
    let ys_host = (0..rows)
        .map(|i| Ok(vec![cast::<T>(half1 - i as f64)?; cols]))
        .collect::<Result<Vec<Vec<T>>, ImgprocError>>()?;
    let xs = Tensor2::from_nested(&xs_host)?;
    let ys = Tensor2::from_nested(&ys_host)?;

    let two_sigma_sq = cast::<T>(2.0)? * sigma * sigma;
    let norm = cast::<T>(std::f64::consts::PI)? * two_sigma_sq;

    let r2 = ops::add(&ops::mul(&xs, &xs)?, &ops::mul(&ys, &ys)?)?;
    let gauss = ops::div_scalar(&ops::exp(&ops::div_scalar(&r2, -two_sigma_sq)), norm);

    kernel.copy_from(&gauss)?;
    Ok(())
}

/// Create a `rows` × `cols` Gaussian kernel.
///
/// # Example
///
/// ```
/// use viennacv_imgproc::filter::kernels::gaussian_kernel_2d;
///
/// let kernel = gaussian_kernel_2d::<f64>(3, 3, 1.0).unwrap();
/// let center = 1.0 / (2.0 * std::f64::consts::PI);
/// assert!((kernel.get([1, 1]).unwrap() - center).abs() < 1e-12);
/// ```
pub fn gaussian_kernel_2d<T: Float>(
    rows: usize,
    cols: usize,
    sigma: T,
) -> Result<Tensor2<T>, ImgprocError> {
    let mut kernel = Tensor2::zeros([rows, cols]);
    gaussian_kernel_2d_into(&mut kernel, sigma)?;
    debug!("gaussian kernel {rows}x{cols}");
    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use viennacv_tensor_ops::ops::sum;

    #[test]
    fn test_sobel_kernel3() -> Result<(), ImgprocError> {
        let kx = sobel_kernel3::<f32>(Direction::X)?;
        assert_eq!(
            kx.as_slice(),
            &[-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0]
        );
        let ky = sobel_kernel3::<f64>(Direction::Y)?;
        assert_eq!(ky.to_nested()[0], vec![1.0, 2.0, 1.0]);
        assert!(matches!(
            sobel_kernel3::<f32>(Direction::Upright),
            Err(ImgprocError::UnsupportedConfiguration { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_sobel_roi_covers_nonzero_taps() -> Result<(), ImgprocError> {
        for direction in [Direction::X, Direction::Y] {
            let kernel = sobel_kernel3::<f32>(direction)?;
            let roi = sobel_roi3(direction)?;
            let nonzero = kernel.iter().filter(|&&v| v != 0.0).count();
            assert_eq!(roi.len(), nonzero);
            for &(r, c) in roi {
                assert_ne!(kernel.get([r, c]), Some(&0.0));
            }
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_size() {
        assert_eq!(gaussian_kernel_size(0), 1);
        assert_eq!(gaussian_kernel_size(25), 51);
        assert_eq!(gaussian_kernel_size(26), 51);
        assert_eq!(gaussian_kernel_size(usize::MAX), 51);
    }

    #[test]
    fn test_gaussian_kernel_2d() -> Result<(), ImgprocError> {
        let kernel = gaussian_kernel_2d::<f64>(11, 11, 1.5)?;
        assert_relative_eq!(sum(&kernel), 1.0, epsilon = 1e-2);

        // symmetric about the center
        assert_relative_eq!(
            *kernel.get([0, 5]).ok_or(ImgprocError::CastError)?,
            *kernel.get([10, 5]).ok_or(ImgprocError::CastError)?
        );
        assert_relative_eq!(
            *kernel.get([5, 0]).ok_or(ImgprocError::CastError)?,
            *kernel.get([5, 10]).ok_or(ImgprocError::CastError)?
        );

        // anisotropic windows keep their own centers
        let kernel = gaussian_kernel_2d::<f32>(1, 3, 1.0)?;
        let c = 1.0 / (2.0 * std::f32::consts::PI);
        assert_relative_eq!(kernel.as_slice()[1], c, epsilon = 1e-6);
        assert_relative_eq!(kernel.as_slice()[0], c * (-0.5f32).exp(), epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_rejects_bad_input() {
        let mut even = Tensor2::<f32>::zeros([4, 3]);
        assert_eq!(
            gaussian_kernel_2d_into(&mut even, 1.0),
            Err(ImgprocError::InvalidKernelGeometry(4, 3))
        );
        assert_eq!(
            gaussian_kernel_2d::<f64>(3, 3, 0.0).err(),
            Some(ImgprocError::InvalidSigma(0.0))
        );
        assert!(matches!(
            gaussian_kernel_2d::<f64>(3, 3, f64::NAN),
            Err(ImgprocError::InvalidSigma(_))
        ));
    }
}
