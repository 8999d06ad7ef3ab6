//! Dense sample-matrix container.
//!
//! This module provides [`SampleMatrix`], the in-memory result type shared by
//! every sequence scheme and transform in the workspace. A matrix holds
//! `dim` rows (one per sampled axis) of `columns` points each.
//!
//! # Memory Layout
//!
//! Values are stored in a single contiguous `Vec<f64>` in dimension-major
//! order: row `d` occupies `values[d * columns .. (d + 1) * columns]`. Per-axis
//! operations (affine rescaling, marginal inverse CDFs, radical-inverse fills)
//! therefore run over contiguous slices.

/// Dense `(dim, columns)` matrix of sample values.
///
/// Rows index the sampled axes, columns index the individual points. A matrix
/// is created fresh per generation call and owned outright by the caller; no
/// component in this workspace retains references to one after returning it.
///
/// # Examples
///
/// ```rust
/// use sampler_core::SampleMatrix;
///
/// let mut samples = SampleMatrix::zeros(2, 4);
/// samples.set(0, 3, 0.25);
///
/// assert_eq!(samples.shape(), (2, 4));
/// assert_eq!(samples.row(0), &[0.0, 0.0, 0.0, 0.25]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleMatrix {
    /// Contiguous dimension-major storage (dim × columns).
    values: Vec<f64>,
    /// Number of rows (sampled axes).
    dim: usize,
    /// Number of columns (points per axis).
    columns: usize,
}

impl SampleMatrix {
    /// Creates a zero-filled matrix with the given shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::SampleMatrix;
    ///
    /// let samples = SampleMatrix::zeros(3, 100);
    /// assert_eq!(samples.shape(), (3, 100));
    /// ```
    pub fn zeros(dim: usize, columns: usize) -> Self {
        Self {
            values: vec![0.0; dim * columns],
            dim,
            columns,
        }
    }

    /// Creates a matrix from an existing dimension-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != dim * columns` (programming error).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::SampleMatrix;
    ///
    /// let samples = SampleMatrix::from_vec(2, 2, vec![0.1, 0.2, 0.3, 0.4]);
    /// assert_eq!(samples.row(1), &[0.3, 0.4]);
    /// ```
    pub fn from_vec(dim: usize, columns: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            dim * columns,
            "buffer length {} does not match shape ({dim}, {columns})",
            values.len()
        );
        Self {
            values,
            dim,
            columns,
        }
    }

    /// Returns the number of rows (sampled axes).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of columns (points per axis).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the shape as a `(dim, columns)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.dim, self.columns)
    }

    /// Returns `true` if the matrix holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at row `d`, column `i`.
    #[inline]
    pub fn get(&self, d: usize, i: usize) -> f64 {
        debug_assert!(d < self.dim && i < self.columns);
        self.values[d * self.columns + i]
    }

    /// Sets the value at row `d`, column `i`.
    #[inline]
    pub fn set(&mut self, d: usize, i: usize, value: f64) {
        debug_assert!(d < self.dim && i < self.columns);
        self.values[d * self.columns + i] = value;
    }

    /// Returns row `d` as a contiguous slice.
    #[inline]
    pub fn row(&self, d: usize) -> &[f64] {
        &self.values[d * self.columns..(d + 1) * self.columns]
    }

    /// Returns row `d` as a mutable contiguous slice.
    #[inline]
    pub fn row_mut(&mut self, d: usize) -> &mut [f64] {
        &mut self.values[d * self.columns..(d + 1) * self.columns]
    }

    /// Returns the full dimension-major buffer.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the full dimension-major buffer mutably.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Keeps only the first `keep` columns of every row, in place.
    ///
    /// A `keep` at or above the current column count leaves the matrix
    /// unchanged. Rows are compacted within the existing buffer, so no
    /// allocation occurs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::SampleMatrix;
    ///
    /// let mut samples = SampleMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// samples.truncate_columns(2);
    ///
    /// assert_eq!(samples.shape(), (2, 2));
    /// assert_eq!(samples.row(0), &[1.0, 2.0]);
    /// assert_eq!(samples.row(1), &[4.0, 5.0]);
    /// ```
    pub fn truncate_columns(&mut self, keep: usize) {
        if keep >= self.columns {
            return;
        }
        for d in 1..self.dim {
            let src = d * self.columns;
            let dst = d * keep;
            self.values.copy_within(src..src + keep, dst);
        }
        self.values.truncate(self.dim * keep);
        self.columns = keep;
    }
}
