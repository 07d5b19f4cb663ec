use thiserror::Error;
use viennacv_image::ImageError;
use viennacv_tensor::TensorError;
use viennacv_tensor_ops::TensorOpsError;

/// An error type for the image processing operations.
#[derive(Error, Debug, PartialEq)]
pub enum ImgprocError {
    /// The requested policy or mode has no implementation.
    #[error("Unsupported configuration for {operation}: {reason}")]
    UnsupportedConfiguration {
        /// Name of the operation that rejected the request.
        operation: &'static str,
        /// What was requested.
        reason: String,
    },

    /// The kernel does not have odd, non-zero dimensions.
    #[error("Kernel must have odd, non-zero dimensions, got {0}x{1}")]
    InvalidKernelGeometry(usize, usize),

    /// A tap of the ROI list lies outside the kernel.
    #[error("ROI tap ({row}, {col}) lies outside the {kernel_rows}x{kernel_cols} kernel")]
    InvalidRoiCoordinate {
        /// Tap row.
        row: usize,
        /// Tap column.
        col: usize,
        /// Kernel rows.
        kernel_rows: usize,
        /// Kernel columns.
        kernel_cols: usize,
    },

    /// Source and destination shapes differ.
    #[error("Shape mismatch: {0:?} != {1:?}")]
    ShapeMismatch([usize; 2], [usize; 2]),

    /// The image does not have the number of channels the operation needs.
    #[error("Expected {0} channels, got {1}")]
    ChannelCountMismatch(usize, usize),

    /// The Gaussian sigma is not a finite, positive number.
    #[error("Sigma must be finite and positive, got {0}")]
    InvalidSigma(f64),

    /// A numeric constant could not be represented in the pixel type.
    #[error("Failed to cast a constant to the pixel type")]
    CastError,

    /// Error with the image.
    #[error(transparent)]
    ImageError(#[from] ImageError),

    /// Error with the tensor.
    #[error(transparent)]
    TensorError(#[from] TensorError),

    /// Error from a tensor operation.
    #[error(transparent)]
    TensorOpsError(#[from] TensorOpsError),
}

impl ImgprocError {
    /// Creates an UnsupportedConfiguration error.
    pub fn unsupported(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedConfiguration {
            operation,
            reason: reason.into(),
        }
    }
}
