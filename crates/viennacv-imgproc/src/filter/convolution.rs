use std::borrow::Cow;
use std::ops::Range;

use log::{debug, warn};
use num_traits::Float;
use viennacv_image::Image;
use viennacv_tensor::Tensor2;
use viennacv_tensor_ops::ops::scaled_add_inplace;

use crate::config::{ConvolutionType, FilterConfig, OptimizeLevel};
use crate::error::ImgprocError;
use crate::parallel;

/// Every tap of a `kernel_rows` × `kernel_cols` kernel in row-major order.
///
/// # Example
///
/// ```
/// use viennacv_imgproc::filter::dense_roi;
///
/// assert_eq!(dense_roi(1, 3), vec![(0, 0), (0, 1), (0, 2)]);
/// ```
pub fn dense_roi(kernel_rows: usize, kernel_cols: usize) -> Vec<(usize, usize)> {
    (0..kernel_rows)
        .flat_map(|row| (0..kernel_cols).map(move |col| (row, col)))
        .collect()
}

pub(crate) fn check_optimize_level(
    operation: &'static str,
    config: FilterConfig,
) -> Result<(), ImgprocError> {
    if config.optimize_level != OptimizeLevel::First {
        warn!(
            "{operation}: optimization level {} is not finished yet",
            config.optimize_level
        );
        return Err(ImgprocError::unsupported(
            operation,
            format!("optimization level {}", config.optimize_level),
        ));
    }
    Ok(())
}

pub(crate) fn check_config(
    operation: &'static str,
    config: FilterConfig,
) -> Result<(), ImgprocError> {
    if config.convolution_type != ConvolutionType::Equiv {
        warn!(
            "{operation}: convolution type {} is not implemented",
            config.convolution_type
        );
        return Err(ImgprocError::unsupported(
            operation,
            format!("convolution type {}", config.convolution_type),
        ));
    }
    check_optimize_level(operation, config)
}

/// Validate the kernel geometry and the ROI, and expand an empty ROI to every tap.
fn resolve_taps<'a, T>(
    kernel: &Tensor2<T>,
    roi: &'a [(usize, usize)],
) -> Result<Cow<'a, [(usize, usize)]>, ImgprocError> {
    let [rows, cols] = kernel.shape;
    if rows % 2 == 0 || cols % 2 == 0 {
        return Err(ImgprocError::InvalidKernelGeometry(rows, cols));
    }
    if let Some(&(row, col)) = roi.iter().find(|&&(r, c)| r >= rows || c >= cols) {
        return Err(ImgprocError::InvalidRoiCoordinate {
            row,
            col,
            kernel_rows: rows,
            kernel_cols: cols,
        });
    }
    if roi.is_empty() {
        Ok(Cow::Owned(dense_roi(rows, cols)))
    } else {
        Ok(Cow::Borrowed(roi))
    }
}

/// Source and destination ranges along one axis for a tap displaced by `bias`.
///
/// Returns `None` when the shifted windows do not overlap.
fn tap_ranges(bias: isize, len: usize) -> Option<(Range<usize>, Range<usize>)> {
    let shift = bias.unsigned_abs();
    if shift >= len {
        return None;
    }
    if bias >= 0 {
        Some((shift..len, 0..len - shift))
    } else {
        Some((0..len - shift, shift..len))
    }
}

/// Shift-and-add accumulation of the validated taps into `dst`.
fn apply_taps<T>(
    src: &Tensor2<T>,
    kernel: &Tensor2<T>,
    dst: &mut Tensor2<T>,
    taps: &[(usize, usize)],
) -> Result<(), ImgprocError>
where
    T: Float,
{
    let [rows, cols] = src.shape;
    let half1 = ((kernel.rows() - 1) / 2) as isize;
    let half2 = ((kernel.cols() - 1) / 2) as isize;

    dst.clear();

    for &(row, col) in taps {
        let bias1 = row as isize - half1;
        let bias2 = col as isize - half2;

        let (Some((src_rows, dst_rows)), Some((src_cols, dst_cols))) =
            (tap_ranges(bias1, rows), tap_ranges(bias2, cols))
        else {
            debug!("skipping tap ({row}, {col}): no overlap at displacement ({bias1}, {bias2})");
            continue;
        };

        let weight = kernel
            .get([row, col])
            .copied()
            .ok_or(ImgprocError::InvalidRoiCoordinate {
                row,
                col,
                kernel_rows: kernel.rows(),
                kernel_cols: kernel.cols(),
            })?;

        let src_view = src.slice(src_rows, src_cols)?;
        let mut dst_view = dst.slice_mut(dst_rows, dst_cols)?;
        scaled_add_inplace(&mut dst_view, &src_view, weight)?;
    }

    Ok(())
}

/// Convolve a matrix with a kernel over a list of kernel taps.
///
/// Computes `dst(r, c) = Σ k(i, j) · src(r + i - h1, c + j - h2)` over the taps
/// `(i, j)` of `roi`, where `(h1, h2)` is the kernel center. Source samples
/// outside the matrix contribute zero. An empty `roi` applies every tap.
///
/// # Arguments
///
/// * `src` - The source matrix.
/// * `kernel` - The kernel, with odd row and column counts.
/// * `dst` - The destination matrix, with the shape of `src`. Overwritten.
/// * `roi` - The `(row, col)` kernel taps to apply.
/// * `config` - Convolution policies. Only `Equiv` / `First` are implemented.
///
/// # Errors
///
/// Fails before touching `dst` when the configuration is unsupported, the
/// kernel geometry is invalid, a tap lies outside the kernel, or the shapes of
/// `src` and `dst` differ.
///
/// # Example
///
/// ```
/// use viennacv_imgproc::{filter::convolve2d, FilterConfig};
/// use viennacv_tensor::Tensor2;
///
/// let src = Tensor2::from_nested(&[vec![0.0f32, 1.0, 0.0]]).unwrap();
/// let kernel = Tensor2::from_nested(&[vec![1.0f32, 2.0, 3.0]]).unwrap();
/// let mut dst = Tensor2::zeros([1, 3]);
///
/// convolve2d(&src, &kernel, &mut dst, &[], FilterConfig::default()).unwrap();
/// assert_eq!(dst.as_slice(), &[3.0, 2.0, 1.0]);
/// ```
pub fn convolve2d<T>(
    src: &Tensor2<T>,
    kernel: &Tensor2<T>,
    dst: &mut Tensor2<T>,
    roi: &[(usize, usize)],
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float,
{
    check_config("convolve2d", config)?;
    let taps = resolve_taps(kernel, roi)?;
    if src.shape != dst.shape {
        return Err(ImgprocError::ShapeMismatch(src.shape, dst.shape));
    }
    debug!(
        "convolve2d: {:?} source, {:?} kernel, {} taps",
        src.shape,
        kernel.shape,
        taps.len()
    );
    apply_taps(src, kernel, dst, &taps)
}

/// Convolve a matrix in place.
///
/// The matrix is copied into a temporary that serves as the source, so the
/// result equals [`convolve2d`] into a separate destination.
pub fn convolve2d_inplace<T>(
    matrix: &mut Tensor2<T>,
    kernel: &Tensor2<T>,
    roi: &[(usize, usize)],
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float,
{
    check_config("convolve2d_inplace", config)?;
    let taps = resolve_taps(kernel, roi)?;
    let src = matrix.clone();
    apply_taps(&src, kernel, matrix, &taps)
}

/// Convolve every channel of an image with the same kernel and taps.
///
/// `dst` is reshaped to the channel count and channel shape of `src` and takes
/// its format. Channels are processed in parallel and independently.
///
/// # Errors
///
/// Fails before touching `dst` when the configuration is unsupported, the
/// kernel geometry is invalid or a tap lies outside the kernel.
pub fn convolve<T>(
    src: &Image<T>,
    kernel: &Tensor2<T>,
    dst: &mut Image<T>,
    roi: &[(usize, usize)],
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float + Send + Sync,
{
    check_config("convolve", config)?;
    let taps = resolve_taps(kernel, roi)?;

    if dst.num_channels() != src.num_channels() || dst.size() != src.size() {
        dst.resize_channels(src.num_channels(), src.rows(), src.cols())?;
    }
    dst.set_format(src.format())?;

    debug!(
        "convolve: {} channels of {}, {:?} kernel, {} taps",
        src.num_channels(),
        src.size(),
        kernel.shape,
        taps.len()
    );
    parallel::par_iter_channels(src, dst, |src_ch, dst_ch| {
        apply_taps(src_ch, kernel, dst_ch, &taps)
    })
}

/// Convolve every channel of an image in place.
pub fn convolve_inplace<T>(
    image: &mut Image<T>,
    kernel: &Tensor2<T>,
    roi: &[(usize, usize)],
    config: FilterConfig,
) -> Result<(), ImgprocError>
where
    T: Float + Send + Sync,
{
    check_config("convolve_inplace", config)?;
    resolve_taps(kernel, roi)?;
    let src = image.clone();
    convolve(&src, kernel, image, roi, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use viennacv_tensor::TensorError;

    #[test]
    fn test_tap_ranges() {
        assert_eq!(tap_ranges(0, 4), Some((0..4, 0..4)));
        assert_eq!(tap_ranges(1, 4), Some((1..4, 0..3)));
        assert_eq!(tap_ranges(-2, 4), Some((0..2, 2..4)));
        assert_eq!(tap_ranges(4, 4), None);
        assert_eq!(tap_ranges(-5, 4), None);
        assert_eq!(tap_ranges(0, 0), None);
    }

    #[test]
    fn test_dense_roi() {
        assert_eq!(dense_roi(2, 2), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(dense_roi(0, 3).is_empty());
    }

    #[test]
    fn test_single_tap_shift() -> Result<(), ImgprocError> {
        let src = Tensor2::<f32>::from_shape_fn([3, 3], |[i, j]| (i * 3 + j) as f32);
        let mut kernel = Tensor2::<f32>::zeros([3, 3]);
        *kernel
            .get_mut([1, 2])
            .ok_or(TensorError::index_out_of_bounds(5, 9))? = 1.0;
        let mut dst = Tensor2::<f32>::from_shape_val([3, 3], -1.0);

        // tap (1, 2) reads the right-hand neighbour
        convolve2d(&src, &kernel, &mut dst, &[(1, 2)], FilterConfig::default())?;
        assert_eq!(
            dst.as_slice(),
            &[1.0, 2.0, 0.0, 4.0, 5.0, 0.0, 7.0, 8.0, 0.0]
        );
        Ok(())
    }

    #[test]
    fn test_kernel_larger_than_source() -> Result<(), ImgprocError> {
        let src = Tensor2::<f64>::from_shape_val([1, 2], 1.0);
        let kernel = Tensor2::<f64>::from_shape_val([5, 5], 1.0);
        let mut dst = Tensor2::<f64>::zeros([1, 2]);

        // only the taps with a zero row displacement and |col shift| < 2 overlap
        convolve2d(&src, &kernel, &mut dst, &[], FilterConfig::default())?;
        assert_eq!(dst.as_slice(), &[2.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_shape_mismatch() {
        let src = Tensor2::<f32>::zeros([2, 2]);
        let kernel = Tensor2::<f32>::from_shape_val([1, 1], 1.0);
        let mut dst = Tensor2::<f32>::zeros([2, 3]);
        assert_eq!(
            convolve2d(&src, &kernel, &mut dst, &[], FilterConfig::default()),
            Err(ImgprocError::ShapeMismatch([2, 2], [2, 3]))
        );
    }
}
