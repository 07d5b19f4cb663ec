use log::warn;
use num_traits::Float;
use viennacv_image::{Image, ImageFormat};

use super::gray::gray_from_rgb;
use crate::error::ImgprocError;

/// Convert an image to another channel format.
///
/// Only conversion to [`ImageFormat::Gray`] from a 3-channel image is
/// implemented. Any other target is reported as unsupported and `dst` is left
/// untouched.
///
/// # Example
///
/// ```
/// use viennacv_image::{Image, ImageFormat};
/// use viennacv_imgproc::color::format_transform;
///
/// let rgb = Image::<f64>::from_size_val([2, 2].into(), 3, 0.25).unwrap();
/// let mut gray = Image::<f64>::zeros(1, 2, 2).unwrap();
///
/// format_transform(&rgb, &mut gray, ImageFormat::Gray).unwrap();
/// assert!(gray.channel(0).unwrap().iter().all(|&v| (v - 0.25).abs() < 1e-4));
/// ```
pub fn format_transform<T>(
    src: &Image<T>,
    dst: &mut Image<T>,
    target: ImageFormat,
) -> Result<(), ImgprocError>
where
    T: Float,
{
    match target {
        ImageFormat::Gray => gray_from_rgb(src, dst),
        other => {
            warn!("format_transform: conversion to {other} is not implemented");
            Err(ImgprocError::unsupported(
                "format_transform",
                format!("target format {other}"),
            ))
        }
    }
}
