use num_traits::Float;
use viennacv_image::{Image, ImageFormat};
use viennacv_tensor_ops::ops::scaled_add_inplace;

use crate::error::ImgprocError;

/// Red weight of the grayscale conversion.
pub const RW: f64 = 0.2989;
/// Green weight of the grayscale conversion.
pub const GW: f64 = 0.5870;
/// Blue weight of the grayscale conversion.
pub const BW: f64 = 0.1140;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.2989 * R + 0.5870 * G + 0.1140 * B
///
/// The weights sum to 0.9999, so a neutral gray `c` maps to `0.9999 * c`.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output grayscale image. Reshaped to one channel of the source size.
///
/// Precondition: the input image must have 3 channels.
///
/// # Example
///
/// ```
/// use viennacv_image::{Image, ImageFormat};
/// use viennacv_imgproc::color::gray_from_rgb;
///
/// let image = Image::<f32>::zeros(3, 5, 4).unwrap();
/// let mut gray = Image::<f32>::zeros(1, 1, 1).unwrap();
///
/// gray_from_rgb(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.format(), ImageFormat::Gray);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T>, dst: &mut Image<T>) -> Result<(), ImgprocError>
where
    T: Float,
{
    if src.num_channels() != 3 {
        return Err(ImgprocError::ChannelCountMismatch(3, src.num_channels()));
    }

    let rw = T::from(RW).ok_or(ImgprocError::CastError)?;
    let gw = T::from(GW).ok_or(ImgprocError::CastError)?;
    let bw = T::from(BW).ok_or(ImgprocError::CastError)?;

    if dst.num_channels() == 1 && dst.size() == src.size() {
        dst.channel_mut(0)?.clear();
    } else {
        dst.resize_channels(1, src.rows(), src.cols())?;
    }
    dst.set_format(ImageFormat::Gray)?;

    let gray = dst.channel_mut(0)?;
    for (channel, weight) in src.channels().iter().zip([rw, gw, bw]) {
        scaled_add_inplace(&mut gray.view_mut(), &channel.view(), weight)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gray_from_rgb_weights() -> Result<(), ImgprocError> {
        let src = Image::from_nested(&[
            vec![vec![1.0f64, 0.0]],
            vec![vec![0.0, 1.0]],
            vec![vec![0.0, 0.0]],
        ])?;
        let mut dst = Image::zeros(1, 1, 2)?;
        gray_from_rgb(&src, &mut dst)?;

        let gray = dst.channel(0)?;
        assert_relative_eq!(gray.as_slice()[0], RW);
        assert_relative_eq!(gray.as_slice()[1], GW);
        Ok(())
    }

    #[test]
    fn gray_from_rgb_clears_previous_content() -> Result<(), ImgprocError> {
        let src = Image::<f32>::zeros(3, 2, 2)?;
        let mut dst = Image::<f32>::from_size_val([2, 2].into(), 1, 5.0)?;
        gray_from_rgb(&src, &mut dst)?;
        assert!(dst.channel(0)?.iter().all(|&v| v == 0.0));
        Ok(())
    }

    #[test]
    fn gray_from_rgb_wrong_channels() -> Result<(), ImgprocError> {
        let src = Image::<f32>::zeros(2, 2, 2)?;
        let mut dst = Image::<f32>::zeros(4, 3, 3)?;
        let before = dst.clone();
        assert_eq!(
            gray_from_rgb(&src, &mut dst),
            Err(ImgprocError::ChannelCountMismatch(3, 2))
        );
        assert_eq!(dst, before);
        Ok(())
    }
}
