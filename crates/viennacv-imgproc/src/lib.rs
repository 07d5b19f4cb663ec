#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// convolution and filter policies.
pub mod config;

/// Error types for the image processing operations.
pub mod error;

/// image filtering module.
pub mod filter;

mod parallel;

pub use crate::config::{ConvolutionType, Direction, FilterConfig, OptimizeLevel};
pub use crate::error::ImgprocError;
