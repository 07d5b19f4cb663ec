use std::fmt;

/// Channel layout of an [`Image`](crate::Image).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Three channels in red, green, blue order.
    #[default]
    Rgb,
    /// A single intensity channel.
    Gray,
    /// Untagged planar data with any number of channels.
    Raw,
}

impl ImageFormat {
    /// The format assigned to freshly built images with `num_channels` channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use viennacv_image::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_num_channels(1), ImageFormat::Gray);
    /// assert_eq!(ImageFormat::from_num_channels(3), ImageFormat::Rgb);
    /// assert_eq!(ImageFormat::from_num_channels(2), ImageFormat::Raw);
    /// ```
    pub fn from_num_channels(num_channels: usize) -> Self {
        match num_channels {
            1 => ImageFormat::Gray,
            3 => ImageFormat::Rgb,
            _ => ImageFormat::Raw,
        }
    }

    /// The channel count required by the format, if fixed.
    pub fn num_channels(&self) -> Option<usize> {
        match self {
            ImageFormat::Rgb => Some(3),
            ImageFormat::Gray => Some(1),
            ImageFormat::Raw => None,
        }
    }

    /// Whether an image with `num_channels` channels may carry this tag.
    pub fn accepts(&self, num_channels: usize) -> bool {
        num_channels > 0 && self.num_channels().map_or(true, |n| n == num_channels)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Rgb => "RGB",
            ImageFormat::Gray => "Gray",
            ImageFormat::Raw => "Raw",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::ImageFormat;

    #[test]
    fn test_accepts() {
        assert!(ImageFormat::Rgb.accepts(3));
        assert!(!ImageFormat::Rgb.accepts(1));
        assert!(ImageFormat::Gray.accepts(1));
        assert!(ImageFormat::Raw.accepts(2));
        assert!(!ImageFormat::Raw.accepts(0));
    }
}
