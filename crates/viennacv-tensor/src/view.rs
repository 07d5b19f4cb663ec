use crate::{get_strides_from_shape, Tensor2, TensorError};

/// A non-owning rectangular window into the storage of a matrix.
///
/// Rows of the window are contiguous in memory; consecutive rows are
/// `row_stride` elements apart in the parent storage.
///
/// # Examples
///
/// ```rust
/// use viennacv_tensor::Tensor2;
///
/// let t = Tensor2::<i32>::from_shape_fn([3, 4], |[i, j]| (i * 4 + j) as i32);
/// let view = t.slice(1..3, 1..3).unwrap();
/// assert_eq!(view.shape, [2, 2]);
/// assert_eq!(view.row(1).unwrap(), &[9, 10]);
/// assert_eq!(view.as_contiguous().as_slice(), &[5, 6, 9, 10]);
/// ```
pub struct TensorView<'a, T> {
    storage: &'a [T],
    offset: usize,
    row_stride: usize,
    /// The shape of the view as `[rows, cols]`.
    pub shape: [usize; 2],
}

impl<'a, T> TensorView<'a, T> {
    pub(crate) fn new(
        storage: &'a [T],
        offset: usize,
        shape: [usize; 2],
        row_stride: usize,
    ) -> Self {
        Self {
            storage,
            offset,
            row_stride,
            shape,
        }
    }

    /// Number of rows in the view.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns in the view.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Number of elements visible through the view.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    /// Borrow row `r` of the view.
    ///
    /// # Errors
    ///
    /// If `r` is not a row of the view, an error is returned.
    pub fn row(&self, r: usize) -> Result<&'a [T], TensorError> {
        if r >= self.rows() {
            return Err(TensorError::index_out_of_bounds(r, self.rows()));
        }
        let start = self.offset + r * self.row_stride;
        Ok(&self.storage[start..start + self.cols()])
    }

    /// Iterate over the rows of the view.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.rows()).filter_map(move |r| self.row(r).ok())
    }

    /// Get the element at `[row, col]` of the view.
    pub fn get(&self, index: [usize; 2]) -> Option<&'a T> {
        if index[0] >= self.rows() || index[1] >= self.cols() {
            return None;
        }
        self.storage
            .get(self.offset + index[0] * self.row_stride + index[1])
    }

    /// Copy the view into an owned, contiguous matrix.
    pub fn as_contiguous(&self) -> Tensor2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.numel());
        self.iter_rows().for_each(|row| data.extend_from_slice(row));
        Tensor2 {
            storage: data,
            shape: self.shape,
            strides: get_strides_from_shape(self.shape),
        }
    }
}

/// A mutable rectangular window into the storage of a matrix.
pub struct TensorViewMut<'a, T> {
    storage: &'a mut [T],
    offset: usize,
    row_stride: usize,
    /// The shape of the view as `[rows, cols]`.
    pub shape: [usize; 2],
}

impl<'a, T> TensorViewMut<'a, T> {
    pub(crate) fn new(
        storage: &'a mut [T],
        offset: usize,
        shape: [usize; 2],
        row_stride: usize,
    ) -> Self {
        Self {
            storage,
            offset,
            row_stride,
            shape,
        }
    }

    /// Number of rows in the view.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns in the view.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Number of elements visible through the view.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    /// Borrow row `r` of the view.
    ///
    /// # Errors
    ///
    /// If `r` is not a row of the view, an error is returned.
    pub fn row(&self, r: usize) -> Result<&[T], TensorError> {
        if r >= self.rows() {
            return Err(TensorError::index_out_of_bounds(r, self.rows()));
        }
        let start = self.offset + r * self.row_stride;
        Ok(&self.storage[start..start + self.cols()])
    }

    /// Mutably borrow row `r` of the view.
    ///
    /// # Errors
    ///
    /// If `r` is not a row of the view, an error is returned.
    pub fn row_mut(&mut self, r: usize) -> Result<&mut [T], TensorError> {
        if r >= self.rows() {
            return Err(TensorError::index_out_of_bounds(r, self.rows()));
        }
        let start = self.offset + r * self.row_stride;
        let cols = self.cols();
        Ok(&mut self.storage[start..start + cols])
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> TensorView<'_, T> {
        TensorView::new(&*self.storage, self.offset, self.shape, self.row_stride)
    }

    /// Overwrite every element visible through the view.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for r in 0..self.rows() {
            if let Ok(row) = self.row_mut(r) {
                row.fill(value.clone());
            }
        }
    }
}
