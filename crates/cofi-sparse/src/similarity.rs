//! Cosine similarity between compressed matrix rows.

use crate::comp::CompMatrix;

/// Cosine similarity between major slices `a` and `b`.
///
/// The dot product is computed with a two-pointer merge over the sorted
/// index slices, so the cost is O(|a| + |b|). Returns 0.0 when either row
/// has a zero norm.
///
/// `norms` must come from [`CompMatrix::row_norms`] on the same matrix.
pub fn cosine_sim(mat: &CompMatrix, norms: &[f32], a: usize, b: usize) -> f32 {
    if norms[a] == 0.0 || norms[b] == 0.0 {
        return 0.0;
    }

    let (a_ind, a_values) = mat.row(a);
    let (b_ind, b_values) = mat.row(b);

    let mut i = 0;
    let mut j = 0;
    let mut dot = 0.0f32;

    while i < a_ind.len() && j < b_ind.len() {
        if a_ind[i] < b_ind[j] {
            i += 1;
        } else if a_ind[i] > b_ind[j] {
            j += 1;
        } else {
            dot += a_values[i] * b_values[j];
            i += 1;
            j += 1;
        }
    }

    dot / (norms[a] * norms[b])
}
