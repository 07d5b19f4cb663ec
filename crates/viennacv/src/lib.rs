#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! ```rust
//! use viennacv::image::Image;
//! use viennacv::imgproc::{filter, Direction, FilterConfig};
//!
//! let src = Image::from_nested(&[vec![vec![0.0f32, 0.0, 1.0, 1.0]; 3]]).unwrap();
//! let mut dst = Image::zeros(1, 3, 4).unwrap();
//! filter::sobel(&src, &mut dst, Direction::X, FilterConfig::default()).unwrap();
//! ```

#[doc(inline)]
pub use viennacv_tensor as tensor;

#[doc(inline)]
pub use viennacv_tensor_ops as tensor_ops;

#[doc(inline)]
pub use viennacv_image as image;

#[doc(inline)]
pub use viennacv_imgproc as imgproc;
