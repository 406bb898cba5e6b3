//! Per-row mean centering and row norms.

use crate::comp::CompMatrix;

impl CompMatrix {
    /// Subtract each major slice's arithmetic mean from its stored values.
    ///
    /// The mean is taken over stored entries only; positions the row never
    /// rated do not pull it toward zero. Slices with no stored entries have
    /// mean 0.
    ///
    /// The result shares `ptr` and `ind` with the source layout and is NOT
    /// re-canonicalized: centering can produce stored zeros (a slice whose
    /// values are all equal centers to all-zero), and downstream consumers
    /// tolerate them.
    pub fn mean_centered(&self) -> CompMatrix {
        let mut centered = self.clone();

        for major in 0..self.major_dim {
            let start = self.ptr[major];
            let end = self.ptr[major + 1];
            let mean = slice_mean(&self.values[start..end]);
            for k in start..end {
                centered.values[k] = self.values[k] - mean;
            }
        }

        centered
    }

    /// L2 norm of each major slice, 0.0 for empty slices.
    pub fn row_norms(&self) -> Vec<f32> {
        (0..self.major_dim)
            .map(|major| {
                let (_, values) = self.row(major);
                let sum_sq: f32 = values.iter().map(|v| v * v).sum();
                if sum_sq > 0.0 {
                    sum_sq.sqrt()
                } else {
                    0.0
                }
            })
            .collect()
    }
}

fn slice_mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}
