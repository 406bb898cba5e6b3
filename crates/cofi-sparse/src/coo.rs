//! Coordinate-list (COO) matrix representation.
//!
//! The COO form is an unordered multiset of `(row, col, value)` triplets as
//! produced by a loader. Duplicate coordinates and explicit zeros are allowed
//! here; both are resolved when the triplets are compressed.

use crate::comp::CompMatrix;
use crate::error::MatrixError;

/// An unordered coordinate triplet stream.
///
/// Triplets are stored as parallel arrays. The loader owns this structure
/// until it is converted into a [`CompMatrix`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix {
    pub nrows: usize,
    pub ncols: usize,
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub values: Vec<f32>,
}

impl CooMatrix {
    /// Create an empty COO matrix with the given dimensions.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: Vec::new(),
            cols: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create an empty COO matrix with room for `nvals` triplets.
    pub fn with_capacity(nrows: usize, ncols: usize, nvals: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: Vec::with_capacity(nvals),
            cols: Vec::with_capacity(nvals),
            values: Vec::with_capacity(nvals),
        }
    }

    /// Append a triplet. Bounds are not checked here; out-of-range
    /// coordinates are rejected during compression.
    pub fn push(&mut self, row: usize, col: usize, value: f32) {
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
    }

    /// Number of stored triplets, duplicates included.
    pub fn nvals(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Compress into row-major form, coalescing duplicates and dropping
    /// zeros. See [`CompMatrix::from_coo`].
    pub fn to_comp(&self) -> Result<CompMatrix, MatrixError> {
        CompMatrix::from_coo(self.nrows, self.ncols, &self.rows, &self.cols, &self.values)
    }
}
