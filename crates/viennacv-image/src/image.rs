use num_traits::Zero;
use viennacv_tensor::{Tensor2, TensorError};

use crate::error::ImageError;
use crate::format::ImageFormat;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use viennacv_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A planar image: one matrix per channel, all of the same shape.
///
/// # Examples
///
/// ```
/// use viennacv_image::{Image, ImageFormat};
///
/// let image = Image::<f32>::zeros(3, 4, 5).unwrap();
/// assert_eq!(image.num_channels(), 3);
/// assert_eq!(image.format(), ImageFormat::Rgb);
/// assert_eq!((image.rows(), image.cols()), (4, 5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    channels: Vec<Tensor2<T>>,
    format: ImageFormat,
}

impl<T> Image<T> {
    /// Create an image from its channel matrices and a format tag.
    ///
    /// # Errors
    ///
    /// Fails when `channels` is empty, when the channels differ in shape, or
    /// when `format` cannot hold the given number of channels.
    pub fn new(channels: Vec<Tensor2<T>>, format: ImageFormat) -> Result<Self, ImageError> {
        let first = channels.first().ok_or(ImageError::EmptyChannels)?;
        let expected = first.shape;
        if let Some((channel, ch)) = channels
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.shape != expected)
        {
            return Err(ImageError::ChannelShapeMismatch {
                channel,
                expected,
                actual: ch.shape,
            });
        }
        if !format.accepts(channels.len()) {
            return Err(ImageError::FormatChannelMismatch {
                format,
                channels: channels.len(),
            });
        }
        Ok(Self { channels, format })
    }

    /// Create an image from its channel matrices, inferring the format from
    /// the channel count.
    ///
    /// # Errors
    ///
    /// Fails when `channels` is empty or the channels differ in shape.
    pub fn from_channels(channels: Vec<Tensor2<T>>) -> Result<Self, ImageError> {
        let format = ImageFormat::from_num_channels(channels.len());
        Self::new(channels, format)
    }

    /// Create a zero-filled image with `num_channels` channels of `rows` × `cols`.
    ///
    /// # Errors
    ///
    /// If `num_channels` is zero, an error is returned.
    pub fn zeros(num_channels: usize, rows: usize, cols: usize) -> Result<Self, ImageError>
    where
        T: Zero + Clone,
    {
        Self::from_size_val(
            ImageSize {
                width: cols,
                height: rows,
            },
            num_channels,
            T::zero(),
        )
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `num_channels` - The number of channels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Errors
    ///
    /// If `num_channels` is zero, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use viennacv_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 2, 7u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 2);
    /// ```
    pub fn from_size_val(size: ImageSize, num_channels: usize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        if num_channels == 0 {
            return Err(ImageError::EmptyChannels);
        }
        let channel = Tensor2::from_shape_val([size.height, size.width], val);
        Self::from_channels(vec![channel; num_channels])
    }

    /// Create an image from a host nested sequence indexed as `[channel][row][col]`.
    ///
    /// # Errors
    ///
    /// Fails on an empty outer sequence, ragged rows, or channels of
    /// different shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use viennacv_image::{Image, ImageFormat};
    ///
    /// let image = Image::from_nested(&[
    ///     vec![vec![1.0f32, 2.0], vec![3.0, 4.0]],
    ///     vec![vec![5.0, 6.0], vec![7.0, 8.0]],
    /// ]).unwrap();
    /// assert_eq!(image.format(), ImageFormat::Raw);
    /// assert_eq!(image.channel(1).unwrap().get([1, 0]), Some(&7.0));
    /// ```
    pub fn from_nested(nested: &[Vec<Vec<T>>]) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let channels = nested
            .iter()
            .enumerate()
            .map(|(channel, rows)| {
                Tensor2::from_nested(rows)
                    .map_err(|source| ImageError::InvalidNestedShape { channel, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_channels(channels)
    }

    /// Copy a host nested sequence `[channel][row][col]` into the existing channels.
    ///
    /// The whole input is validated before any channel is written.
    ///
    /// # Errors
    ///
    /// Fails when the channel count or any channel shape differs from the image.
    pub fn import_channels(&mut self, nested: &[Vec<Vec<T>>]) -> Result<(), ImageError>
    where
        T: Clone,
    {
        if nested.len() != self.num_channels() {
            return Err(ImageError::ChannelCountMismatch(
                self.num_channels(),
                nested.len(),
            ));
        }

        let (rows, cols) = (self.rows(), self.cols());
        for (channel, data) in nested.iter().enumerate() {
            if data.len() != rows {
                return Err(ImageError::InvalidNestedShape {
                    channel,
                    source: TensorError::dimension_mismatch(
                        "Nested sequence row count differs from the image",
                        &[rows, cols],
                        &[data.len()],
                    ),
                });
            }
            if let Some((row, values)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
                return Err(ImageError::InvalidNestedShape {
                    channel,
                    source: TensorError::InvalidNestedShape {
                        row,
                        expected: cols,
                        actual: values.len(),
                    },
                });
            }
        }

        for (ch, data) in self.channels.iter_mut().zip(nested.iter()) {
            ch.copy_from_nested(data)?;
        }
        Ok(())
    }

    /// Copy the channels out into a host nested sequence `[channel][row][col]`.
    pub fn export_channels(&self) -> Vec<Vec<Vec<T>>>
    where
        T: Clone,
    {
        self.channels.iter().map(|ch| ch.to_nested()).collect()
    }

    /// Borrow one channel.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<&Tensor2<T>, ImageError> {
        let n = self.num_channels();
        self.channels
            .get(channel)
            .ok_or(ImageError::ChannelIndexOutOfBounds(channel, n))
    }

    /// Mutably borrow one channel.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel_mut(&mut self, channel: usize) -> Result<&mut Tensor2<T>, ImageError> {
        let n = self.num_channels();
        self.channels
            .get_mut(channel)
            .ok_or(ImageError::ChannelIndexOutOfBounds(channel, n))
    }

    /// All channels in order.
    pub fn channels(&self) -> &[Tensor2<T>] {
        &self.channels
    }

    /// All channels in order, mutably.
    pub fn channels_mut(&mut self) -> &mut [Tensor2<T>] {
        &mut self.channels
    }

    /// Replace the channel sequence with `num_channels` zero-filled matrices
    /// of `rows` × `cols`.
    ///
    /// The format is reset to the one inferred from `num_channels`.
    ///
    /// # Errors
    ///
    /// If `num_channels` is zero, an error is returned.
    pub fn resize_channels(
        &mut self,
        num_channels: usize,
        rows: usize,
        cols: usize,
    ) -> Result<(), ImageError>
    where
        T: Zero + Clone,
    {
        *self = Self::zeros(num_channels, rows, cols)?;
        Ok(())
    }

    /// Change the format tag.
    ///
    /// # Errors
    ///
    /// If the format cannot hold the current number of channels, an error is returned.
    pub fn set_format(&mut self, format: ImageFormat) -> Result<(), ImageError> {
        if !format.accepts(self.num_channels()) {
            return Err(ImageError::FormatChannelMismatch {
                format,
                channels: self.num_channels(),
            });
        }
        self.format = format;
        Ok(())
    }

    /// Get the format tag of the image.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.cols(),
            height: self.rows(),
        }
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.channels.first().map_or(0, |ch| ch.rows())
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.channels.first().map_or(0, |ch| ch.cols())
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.cols()
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.rows()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Image, ImageError, ImageFormat, ImageSize};
    use viennacv_tensor::{Tensor2, TensorError};

    #[test]
    fn image_size() {
        let image_size = ImageSize::from([10, 20]);
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<f32>::zeros(3, 20, 10)?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);
        assert_eq!(image.format(), ImageFormat::Rgb);
        for ch in image.channels() {
            assert!(ch.iter().all(|&v| v == 0.0));
        }
        Ok(())
    }

    #[test]
    fn image_zero_channels() {
        assert_eq!(Image::<u8>::zeros(0, 2, 2), Err(ImageError::EmptyChannels));
        assert_eq!(
            Image::<u8>::from_nested(&[]),
            Err(ImageError::EmptyChannels)
        );
    }

    #[test]
    fn image_zero_sized() -> Result<(), ImageError> {
        let image = Image::<u8>::zeros(1, 0, 4)?;
        assert_eq!(image.rows(), 0);
        assert_eq!(image.cols(), 4);
        assert_eq!(image.format(), ImageFormat::Gray);
        Ok(())
    }

    #[test]
    fn image_new_validation() -> Result<(), ImageError> {
        let a = Tensor2::<u8>::zeros([2, 2]);
        let b = Tensor2::<u8>::zeros([2, 3]);
        assert_eq!(
            Image::new(vec![a.clone(), b], ImageFormat::Raw),
            Err(ImageError::ChannelShapeMismatch {
                channel: 1,
                expected: [2, 2],
                actual: [2, 3],
            })
        );
        assert_eq!(
            Image::new(vec![a.clone(), a.clone()], ImageFormat::Rgb),
            Err(ImageError::FormatChannelMismatch {
                format: ImageFormat::Rgb,
                channels: 2,
            })
        );
        let image = Image::new(vec![a.clone(), a.clone(), a], ImageFormat::Raw)?;
        assert_eq!(image.format(), ImageFormat::Raw);
        Ok(())
    }

    #[test]
    fn image_nested_roundtrip_preserves_order() -> Result<(), ImageError> {
        let nested = vec![
            vec![vec![1u8, 2, 3], vec![4, 5, 6]],
            vec![vec![7, 8, 9], vec![10, 11, 12]],
            vec![vec![13, 14, 15], vec![16, 17, 18]],
        ];
        let image = Image::from_nested(&nested)?;
        assert_eq!(image.format(), ImageFormat::Rgb);
        assert_eq!(image.channel(2)?.get([0, 1]), Some(&14));
        assert_eq!(image.export_channels(), nested);
        Ok(())
    }

    #[test]
    fn image_from_nested_ragged() {
        let res = Image::from_nested(&[vec![vec![1u8, 2], vec![3]]]);
        assert_eq!(
            res,
            Err(ImageError::InvalidNestedShape {
                channel: 0,
                source: TensorError::InvalidNestedShape {
                    row: 1,
                    expected: 2,
                    actual: 1,
                },
            })
        );
    }

    #[test]
    fn image_import_channels() -> Result<(), ImageError> {
        let mut image = Image::<i32>::zeros(2, 2, 2)?;
        image.import_channels(&[vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]])?;
        assert_eq!(image.channel(1)?.as_slice(), &[5, 6, 7, 8]);

        // a bad second channel leaves the first one untouched
        let res = image.import_channels(&[vec![vec![0, 0], vec![0, 0]], vec![vec![0, 0]]]);
        assert!(matches!(
            res,
            Err(ImageError::InvalidNestedShape { channel: 1, .. })
        ));
        assert_eq!(image.channel(0)?.as_slice(), &[1, 2, 3, 4]);

        assert_eq!(
            image.import_channels(&[vec![vec![0, 0], vec![0, 0]]]),
            Err(ImageError::ChannelCountMismatch(2, 1))
        );
        Ok(())
    }

    #[test]
    fn image_channel_access() -> Result<(), ImageError> {
        let mut image = Image::<f32>::zeros(2, 2, 3)?;
        *image
            .channel_mut(1)?
            .get_mut([1, 2])
            .ok_or(ImageError::EmptyChannels)? = 9.0;
        assert_eq!(image.channel(1)?.get([1, 2]), Some(&9.0));
        assert_eq!(
            image.channel(2).err(),
            Some(ImageError::ChannelIndexOutOfBounds(2, 2))
        );
        Ok(())
    }

    #[test]
    fn image_resize_and_format() -> Result<(), ImageError> {
        let mut image = Image::<f32>::from_size_val([4, 4].into(), 3, 1.0)?;
        image.resize_channels(1, 2, 5)?;
        assert_eq!(image.num_channels(), 1);
        assert_eq!((image.rows(), image.cols()), (2, 5));
        assert_eq!(image.format(), ImageFormat::Gray);
        assert!(image.channel(0)?.iter().all(|&v| v == 0.0));

        image.set_format(ImageFormat::Raw)?;
        assert_eq!(image.format(), ImageFormat::Raw);
        assert!(image.set_format(ImageFormat::Rgb).is_err());
        assert_eq!(image.format(), ImageFormat::Raw);
        Ok(())
    }
}
