use std::ops::Range;

use num_traits::Zero;
use thiserror::Error;

use crate::view::{TensorView, TensorViewMut};

/// Error type for tensor creation, access and interchange.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    ///
    /// The product of the shape dimensions must equal the number of elements.
    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// Index exceeds tensor bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Tensor dimensions incompatible for the requested operation.
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },

    /// A view range is reversed or exceeds the tensor extent.
    #[error("Invalid range {start}..{end} for dimension of size {size}")]
    InvalidRange {
        /// First index of the range
        start: usize,
        /// One past the last index of the range
        end: usize,
        /// The size of the dimension being sliced
        size: usize,
    },

    /// A nested host sequence is ragged or does not match the tensor extent.
    #[error("Nested row {row} has {actual} elements, expected {expected}")]
    InvalidNestedShape {
        /// Index of the offending row
        row: usize,
        /// Expected number of elements in the row
        expected: usize,
        /// Actual number of elements in the row
        actual: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error with clear context.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// # Examples
///
/// ```rust
/// use viennacv_tensor::tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3]);
/// assert_eq!(strides, [3, 1]);
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array with owned, contiguous, row-major data.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor
/// * `N` - The number of dimensions
///
/// # Examples
///
/// ```rust
/// use viennacv_tensor::Tensor2;
///
/// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(t.shape, [2, 2]);
/// assert_eq!(t.get([1, 0]), Some(&3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    pub(crate) storage: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            storage: data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Tensor` with the given shape filled with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use viennacv_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_val([2, 2], 1);
    /// assert_eq!(t.as_slice(), &[1, 1, 1, 1]);
    /// ```
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Creates a new `Tensor` with the given shape filled with zeros.
    pub fn zeros(shape: [usize; N]) -> Self
    where
        T: Zero + Clone,
    {
        Self::from_shape_val(shape, T::zero())
    }

    /// Create a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called with the index of the element to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use viennacv_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_fn([2, 2], |[i, j]| (i * 2 + j) as u8);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], f: F) -> Self
    where
        F: Fn([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let data: Vec<T> = (0..numel)
            .map(|i| {
                let mut index = [0; N];
                let mut j = i;
                for k in (0..N).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index)
            })
            .collect();
        Self {
            storage: data,
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Get the data of the tensor as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Returns an iterator over the elements of the tensor in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns a mutable iterator over the elements of the tensor in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Get the offset of the element at the given index, or `None` when out of bounds.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the element at the given index, checking if the index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use viennacv_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.get([0, 1]), Some(&2));
    /// assert!(t.get([2, 0]).is_none());
    /// ```
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index)
            .and_then(|i| self.storage.get(i))
    }

    /// Get a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: [usize; N]) -> Option<&mut T> {
        self.get_iter_offset(index)
            .and_then(move |i| self.storage.get_mut(i))
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.storage.fill(value);
    }

    /// Set every element to the additive identity.
    pub fn clear(&mut self)
    where
        T: Zero + Clone,
    {
        self.fill(T::zero());
    }

    /// Apply a function to each element of the tensor.
    ///
    /// # Example
    ///
    /// ```
    /// use viennacv_tensor::Tensor;
    ///
    /// let t = Tensor::<u8, 1>::from_shape_vec([3], vec![1, 2, 3]).unwrap();
    /// let t2 = t.map(|x| *x + 1);
    /// assert_eq!(t2.as_slice(), &[2, 3, 4]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Tensor<U, N>
    where
        F: Fn(&T) -> U,
    {
        Tensor {
            storage: self.storage.iter().map(f).collect(),
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Apply an element-wise operation on two tensors of the same shape.
    ///
    /// # Errors
    ///
    /// If the shapes of the tensors differ, an error is returned.
    pub fn element_wise_op<F>(
        &self,
        other: &Tensor<T, N>,
        op: F,
    ) -> Result<Tensor<T, N>, TensorError>
    where
        F: Fn(&T, &T) -> T,
    {
        if self.shape != other.shape {
            return Err(TensorError::dimension_mismatch(
                "Element-wise operation requires tensors of the same shape",
                &self.shape,
                &other.shape,
            ));
        }

        let data = self
            .storage
            .iter()
            .zip(other.storage.iter())
            .map(|(a, b)| op(a, b))
            .collect();

        Ok(Tensor {
            storage: data,
            shape: self.shape,
            strides: self.strides,
        })
    }

    /// Copy all elements from another tensor of the same shape.
    pub fn copy_from(&mut self, other: &Tensor<T, N>) -> Result<(), TensorError>
    where
        T: Clone,
    {
        if self.shape != other.shape {
            return Err(TensorError::dimension_mismatch(
                "Copy requires tensors of the same shape",
                &self.shape,
                &other.shape,
            ));
        }
        self.storage.clone_from_slice(&other.storage);
        Ok(())
    }
}

impl<T> Tensor<T, 2> {
    /// Number of rows (first dimension).
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns (second dimension).
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Borrow one row as a contiguous slice.
    pub fn row(&self, r: usize) -> Result<&[T], TensorError> {
        if r >= self.rows() {
            return Err(TensorError::index_out_of_bounds(r, self.rows()));
        }
        let start = r * self.strides[0];
        Ok(&self.storage[start..start + self.cols()])
    }

    /// Return a view covering the whole matrix.
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView::new(&self.storage, 0, self.shape, self.strides[0])
    }

    /// Return a mutable view covering the whole matrix.
    pub fn view_mut(&mut self) -> TensorViewMut<'_, T> {
        let (shape, row_stride) = (self.shape, self.strides[0]);
        TensorViewMut::new(&mut self.storage, 0, shape, row_stride)
    }

    /// Return a rectangular view of `rows` × `cols` addressing the same storage.
    ///
    /// # Errors
    ///
    /// If a range is reversed or exceeds the matrix extent, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use viennacv_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_fn([3, 3], |[i, j]| (i * 3 + j) as u8);
    /// let v = t.slice(1..3, 0..2).unwrap();
    /// assert_eq!(v.shape, [2, 2]);
    /// assert_eq!(v.get([1, 1]), Some(&7));
    /// ```
    pub fn slice(
        &self,
        rows: Range<usize>,
        cols: Range<usize>,
    ) -> Result<TensorView<'_, T>, TensorError> {
        let (offset, shape) = self.window(rows, cols)?;
        Ok(TensorView::new(&self.storage, offset, shape, self.strides[0]))
    }

    /// Return a mutable rectangular view of `rows` × `cols`.
    ///
    /// # Errors
    ///
    /// If a range is reversed or exceeds the matrix extent, an error is returned.
    pub fn slice_mut(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
    ) -> Result<TensorViewMut<'_, T>, TensorError> {
        let (offset, shape) = self.window(rows, cols)?;
        let row_stride = self.strides[0];
        Ok(TensorViewMut::new(&mut self.storage, offset, shape, row_stride))
    }

    fn window(
        &self,
        rows: Range<usize>,
        cols: Range<usize>,
    ) -> Result<(usize, [usize; 2]), TensorError> {
        for (range, size) in [(&rows, self.rows()), (&cols, self.cols())] {
            if range.start > range.end || range.end > size {
                return Err(TensorError::InvalidRange {
                    start: range.start,
                    end: range.end,
                    size,
                });
            }
        }
        let offset = rows.start * self.strides[0] + cols.start;
        Ok((offset, [rows.len(), cols.len()]))
    }

    /// Build a matrix from a host-side nested sequence (row → column).
    ///
    /// An empty outer sequence produces a `0 × 0` matrix.
    ///
    /// # Errors
    ///
    /// If the rows do not all have the same length, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use viennacv_tensor::Tensor2;
    ///
    /// let t = Tensor2::from_nested(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(t.shape, [2, 3]);
    /// assert_eq!(t.to_nested(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    /// ```
    pub fn from_nested<R>(nested: &[R]) -> Result<Self, TensorError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let cols = nested.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nested.len() * cols);
        for (row, values) in nested.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(TensorError::InvalidNestedShape {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Self::from_shape_vec([nested.len(), cols], data)
    }

    /// Copy a host-side nested sequence into this matrix.
    ///
    /// # Errors
    ///
    /// The nested sequence must have exactly `rows()` rows of `cols()` elements.
    pub fn copy_from_nested<R>(&mut self, nested: &[R]) -> Result<(), TensorError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        if nested.len() != self.rows() {
            return Err(TensorError::dimension_mismatch(
                "Nested sequence row count differs from the matrix",
                &self.shape,
                &[nested.len()],
            ));
        }
        let cols = self.cols();
        if let Some((row, values)) = nested
            .iter()
            .enumerate()
            .find(|(_, values)| values.as_ref().len() != cols)
        {
            return Err(TensorError::InvalidNestedShape {
                row,
                expected: cols,
                actual: values.as_ref().len(),
            });
        }
        for (row, values) in nested.iter().enumerate() {
            let start = row * self.strides[0];
            self.storage[start..start + cols].clone_from_slice(values.as_ref());
        }
        Ok(())
    }

    /// Copy the matrix out into a host-side nested sequence (row → column).
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows())
            .map(|r| {
                let start = r * self.strides[0];
                self.storage[start..start + self.cols()].to_vec()
            })
            .collect()
    }
}
