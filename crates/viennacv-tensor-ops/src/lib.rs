#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for tensor operations.
///
/// Defines [`TensorOpsError`] for handling failures during tensor computations.
pub mod error;

/// Slice-level computational kernels shared by the tensor operations.
pub mod kernels;

/// Elementwise arithmetic over tensors and matrix views.
pub mod ops;

pub use error::TensorOpsError;
