//! Filter operations
//!
//! This module provides the ROI convolution engine and the filters built on it.

/// Filter kernels
pub mod kernels;

/// Convolution engine
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
