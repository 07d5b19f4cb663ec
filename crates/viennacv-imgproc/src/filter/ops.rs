use log::debug;
use num_traits::Float;
use viennacv_image::Image;
use viennacv_tensor::Tensor2;

use super::convolution::{check_config, check_optimize_level, convolve, convolve2d};
use super::kernels;
use crate::config::{ConvolutionType, Direction, FilterConfig};
use crate::error::ImgprocError;

/// Compute the 3x3 sobel derivative of a matrix.
///
/// # Arguments
///
/// * `src` - The source matrix.
/// * `dst` - The destination matrix, with the shape of `src`.
/// * `direction` - [`Direction::X`] or [`Direction::Y`].
/// * `config` - Only the optimization level is honoured; the convolution is always `Equiv`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn sobel2d<T>(
    src: &Tensor2<T>,
    dst: &mut Tensor2<T>,
    direction: Direction,
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float,
{
    check_optimize_level("sobel2d", config)?;
    let kernel = kernels::sobel_kernel3(direction)?;
    let roi = kernels::sobel_roi3(direction)?;
    convolve2d(
        src,
        &kernel,
        dst,
        roi,
        config.with_convolution_type(ConvolutionType::Equiv),
    )
}

/// Compute the 3x3 sobel derivative of every channel of an image.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image. Reshaped to the layout of `src`.
/// * `direction` - [`Direction::X`] or [`Direction::Y`].
/// * `config` - Only the optimization level is honoured; the convolution is always `Equiv`.
///
/// # Errors
///
/// [`Direction::Upright`] and optimization levels other than `First` are
/// reported as unsupported and leave `dst` untouched.
///
/// # Example
///
/// ```
/// use viennacv_image::Image;
/// use viennacv_imgproc::{filter::sobel, Direction, FilterConfig};
///
/// let src = Image::from_nested(&[vec![vec![0.0f32, 0.0, 1.0, 1.0]; 3]]).unwrap();
/// let mut dst = Image::zeros(1, 3, 4).unwrap();
///
/// sobel(&src, &mut dst, Direction::X, FilterConfig::default()).unwrap();
/// assert_eq!(dst.channel(0).unwrap().get([1, 1]), Some(&4.0));
/// ```
pub fn sobel<T>(
    src: &Image<T>,
    dst: &mut Image<T>,
    direction: Direction,
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float + Send + Sync,
{
    check_optimize_level("sobel", config)?;
    let kernel = kernels::sobel_kernel3(direction)?;
    let roi = kernels::sobel_roi3(direction)?;
    convolve(
        src,
        &kernel,
        dst,
        roi,
        config.with_convolution_type(ConvolutionType::Equiv),
    )
}

fn gaussian_kernel_for<T: Float>(
    rows: usize,
    cols: usize,
    sigma: T,
) -> Result<Tensor2<T>, ImgprocError> {
    let (krows, kcols) = (
        kernels::gaussian_kernel_size(rows),
        kernels::gaussian_kernel_size(cols),
    );
    debug!("gaussian blur of {rows}x{cols} uses a {krows}x{kcols} kernel");
    kernels::gaussian_kernel_2d(krows, kcols, sigma)
}

/// Blur a matrix with a dense Gaussian kernel.
///
/// The kernel spans `min(2 * dim + 1, 51)` taps along each axis.
///
/// # Arguments
///
/// * `src` - The source matrix.
/// * `sigma` - The standard deviation of the Gaussian.
/// * `dst` - The destination matrix, with the shape of `src`.
/// * `config` - Convolution policies. Only `Equiv` / `First` are implemented.
pub fn gaussian_blur2d<T>(
    src: &Tensor2<T>,
    sigma: T,
    dst: &mut Tensor2<T>,
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float,
{
    check_config("gaussian_blur2d", config)?;
    let kernel = gaussian_kernel_for(src.rows(), src.cols(), sigma)?;
    convolve2d(src, &kernel, dst, &[], config)
}

/// Blur every channel of an image with a dense Gaussian kernel.
///
/// The kernel is synthesized once for the shared channel shape.
///
/// # Errors
///
/// Fails before touching `dst` on an unsupported configuration or an invalid sigma.
pub fn gaussian_blur<T>(
    src: &Image<T>,
    sigma: T,
    dst: &mut Image<T>,
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float + Send + Sync,
{
    check_config("gaussian_blur", config)?;
    let kernel = gaussian_kernel_for(src.rows(), src.cols(), sigma)?;
    convolve(src, &kernel, dst, &[], config)
}
