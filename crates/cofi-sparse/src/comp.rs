//! Compressed sparse matrix representation.
//!
//! Rows (or columns, after a transpose) are stored contiguously as parallel
//! `ind`/`values` arrays, with `ptr` marking where each major slice begins.
//! After construction the representation is canonical:
//!
//! - `ptr` is non-decreasing with `ptr[major_dim] == nnz`
//! - within each major slice, `ind` is strictly ascending
//! - no stored value is zero
//! - every index is below `minor_dim`
//!
//! The canonical form is what makes the merge-based operations downstream
//! (dot products, seen/unseen scans) linear in the number of stored entries.

use crate::error::MatrixError;

/// A compressed sparse matrix in major-order (CSR when rows are major).
///
/// `ptr` has length `major_dim + 1`; the entries of major slice `i` live at
/// `ind[ptr[i]..ptr[i + 1]]` and `values[ptr[i]..ptr[i + 1]]`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompMatrix {
    pub major_dim: usize,
    pub minor_dim: usize,
    pub ptr: Vec<usize>,
    pub ind: Vec<usize>,
    pub values: Vec<f32>,
}

impl CompMatrix {
    /// Build a compressed matrix from coordinate triplets.
    ///
    /// The triplet stream may be unordered, may contain duplicate
    /// coordinates, and may contain explicit zeros. Duplicates are coalesced
    /// by summing their values; entries that are zero (or sum to zero) are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if any triplet lies outside
    /// `major_dim x minor_dim`, and [`MatrixError::TripletLengthMismatch`]
    /// if the parallel arrays disagree on length.
    pub fn from_coo(
        major_dim: usize,
        minor_dim: usize,
        majors: &[usize],
        minors: &[usize],
        values: &[f32],
    ) -> Result<Self, MatrixError> {
        if majors.len() != minors.len() || majors.len() != values.len() {
            return Err(MatrixError::TripletLengthMismatch {
                majors: majors.len(),
                minors: minors.len(),
                values: values.len(),
            });
        }

        // Count pass: per-major entry counts, shifted by one for the
        // prefix sum. Bounds are validated here, before anything else is
        // allocated.
        let mut ptr = vec![0usize; major_dim + 1];
        for i in 0..majors.len() {
            if majors[i] >= major_dim || minors[i] >= minor_dim {
                return Err(MatrixError::IndexOutOfBounds {
                    major: majors[i],
                    minor: minors[i],
                    major_dim,
                    minor_dim,
                });
            }
            if values[i] != 0.0 {
                ptr[majors[i] + 1] += 1;
            }
        }

        for i in 0..major_dim {
            ptr[i + 1] += ptr[i];
        }

        let nnz = ptr[major_dim];
        let mut mat = Self {
            major_dim,
            minor_dim,
            ptr,
            ind: vec![0usize; nnz],
            values: vec![0.0f32; nnz],
        };

        // Scatter pass: place each non-zero triplet at its major's cursor.
        let mut next = mat.ptr[..major_dim].to_vec();
        for i in 0..majors.len() {
            if values[i] == 0.0 {
                continue;
            }
            let pos = next[majors[i]];
            next[majors[i]] += 1;
            mat.ind[pos] = minors[i];
            mat.values[pos] = values[i];
        }

        mat.canonicalize();
        Ok(mat)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.ptr[self.major_dim]
    }

    /// The index/value slices of major `i`.
    pub fn row(&self, i: usize) -> (&[usize], &[f32]) {
        let start = self.ptr[i];
        let end = self.ptr[i + 1];
        (&self.ind[start..end], &self.values[start..end])
    }

    /// Sort each major slice by minor index, coalesce duplicate minors by
    /// summing, and drop entries whose coalesced value is zero.
    ///
    /// Idempotent: a matrix already in canonical form is unchanged.
    fn canonicalize(&mut self) {
        let mut scratch: Vec<(usize, f32)> = Vec::new();
        let mut write_pos = 0usize;

        for major in 0..self.major_dim {
            let start = self.ptr[major];
            let end = self.ptr[major + 1];
            self.ptr[major] = write_pos;

            if start == end {
                continue;
            }

            scratch.clear();
            scratch.extend(
                self.ind[start..end]
                    .iter()
                    .copied()
                    .zip(self.values[start..end].iter().copied()),
            );
            // Stable sort keeps equal minors in scatter order, so the
            // coalescing sum below is deterministic.
            scratch.sort_by_key(|&(minor, _)| minor);

            let mut i = 0;
            while i < scratch.len() {
                let minor = scratch[i].0;
                let mut sum = 0.0f32;
                while i < scratch.len() && scratch[i].0 == minor {
                    sum += scratch[i].1;
                    i += 1;
                }
                // Duplicates may cancel out exactly; those entries vanish.
                if sum != 0.0 {
                    self.ind[write_pos] = minor;
                    self.values[write_pos] = sum;
                    write_pos += 1;
                }
            }
        }

        self.ptr[self.major_dim] = write_pos;
        self.ind.truncate(write_pos);
        self.values.truncate(write_pos);
        self.ind.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Transpose: swap the major and minor dimensions.
    ///
    /// Entries are scattered in ascending source-major order, which leaves
    /// every destination slice already sorted; the result is canonical
    /// whenever `self` is.
    pub fn transpose(&self) -> Self {
        let nnz = self.nnz();
        let mut ptr = vec![0usize; self.minor_dim + 1];

        for &minor in &self.ind {
            ptr[minor + 1] += 1;
        }
        for i in 0..self.minor_dim {
            ptr[i + 1] += ptr[i];
        }

        let mut ind = vec![0usize; nnz];
        let mut values = vec![0.0f32; nnz];
        let mut next = ptr[..self.minor_dim].to_vec();

        for major in 0..self.major_dim {
            for k in self.ptr[major]..self.ptr[major + 1] {
                let minor = self.ind[k];
                let pos = next[minor];
                next[minor] += 1;
                ind[pos] = major;
                values[pos] = self.values[k];
            }
        }

        Self {
            major_dim: self.minor_dim,
            minor_dim: self.major_dim,
            ptr,
            ind,
            values,
        }
    }
}
