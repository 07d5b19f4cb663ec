#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `viennacv-tensor` provides the dense, row-major [`Tensor`] used as the matrix
//! type of every image channel and convolution kernel in viennacv.
//!
//! - **Tensor**: owned data with shape and stride information
//! - **TensorView / TensorViewMut**: rectangular windows into a matrix that
//!   address the parent storage without copying
//! - **Host interchange**: conversion from and to nested `Vec<Vec<T>>` sequences
//!
//! # Quick Start
//!
//! ```rust
//! use viennacv_tensor::Tensor2;
//!
//! let t = Tensor2::from_nested(&[vec![1.0f32, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(t.shape, [2, 2]);
//!
//! let window = t.slice(1..2, 0..2).unwrap();
//! assert_eq!(window.row(0).unwrap(), &[3.0, 4.0]);
//! ```

/// Serde module for serialization and deserialization.
#[cfg(feature = "serde")]
pub mod serde;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

/// View module containing the rectangular matrix views.
pub mod view;

pub use crate::tensor::get_strides_from_shape;
pub use crate::tensor::{Tensor, TensorError};
pub use crate::view::{TensorView, TensorViewMut};

/// Type alias for a 2-dimensional tensor (matrix).
pub type Tensor2<T> = Tensor<T, 2>;
