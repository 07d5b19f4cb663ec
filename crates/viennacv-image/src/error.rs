use viennacv_tensor::TensorError;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when an image is built without any channel.
    #[error("An image needs at least one channel")]
    EmptyChannels,

    /// Error when a channel does not have the shape of the first channel.
    #[error("Channel {channel} has shape {actual:?}, expected {expected:?}")]
    ChannelShapeMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Shape of the first channel.
        expected: [usize; 2],
        /// Shape of the offending channel.
        actual: [usize; 2],
    },

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the number of channels differs from the expected one.
    #[error("Channel count mismatch: expected {0}, got {1}")]
    ChannelCountMismatch(usize, usize),

    /// Error when a format tag is incompatible with the channel count.
    #[error("Format {format} cannot hold {channels} channels")]
    FormatChannelMismatch {
        /// Requested format.
        format: crate::ImageFormat,
        /// Number of channels of the image.
        channels: usize,
    },

    /// Error when host nested data for a channel has the wrong shape.
    #[error("Invalid nested data for channel {channel}: {source}")]
    InvalidNestedShape {
        /// Index of the offending channel.
        channel: usize,
        /// Underlying tensor error.
        source: TensorError,
    },

    /// Error with the tensor.
    #[error(transparent)]
    TensorError(#[from] TensorError),
}
