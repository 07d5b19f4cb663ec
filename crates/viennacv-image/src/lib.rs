#![deny(missing_docs)]
//! Planar image types: one dense matrix per channel plus a format tag.

/// image representation for computer vision purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Channel layout tags.
pub mod format;

pub use crate::error::ImageError;
pub use crate::format::ImageFormat;
pub use crate::image::{Image, ImageSize};
