//! Property-based tests for compressed matrix construction.
//!
//! Verifies the canonical-form invariants, value conservation through
//! coalescing, and transpose round-trips over arbitrary triplet streams.

use proptest::prelude::*;

use cofi_sparse::{cosine_sim, CompMatrix};

/// An arbitrary triplet stream over a small dimension box.
///
/// Values are small integers cast to f32 so that coalescing sums are exact
/// regardless of summation order; zeros and duplicate coordinates are
/// deliberately common.
fn coo_strategy() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize, f32)>)> {
    (1usize..12, 1usize..12).prop_flat_map(|(major_dim, minor_dim)| {
        let triplet = (0..major_dim, 0..minor_dim, -4i8..=4).prop_map(|(maj, min, v)| {
            (maj, min, v as f32)
        });
        prop::collection::vec(triplet, 0..60)
            .prop_map(move |triplets| (major_dim, minor_dim, triplets))
    })
}

fn build(major_dim: usize, minor_dim: usize, triplets: &[(usize, usize, f32)]) -> CompMatrix {
    let majors: Vec<usize> = triplets.iter().map(|t| t.0).collect();
    let minors: Vec<usize> = triplets.iter().map(|t| t.1).collect();
    let values: Vec<f32> = triplets.iter().map(|t| t.2).collect();
    CompMatrix::from_coo(major_dim, minor_dim, &majors, &minors, &values).unwrap()
}

fn assert_canonical(mat: &CompMatrix) -> Result<(), TestCaseError> {
    // ptr is non-decreasing and closes over both parallel arrays.
    prop_assert_eq!(mat.ptr.len(), mat.major_dim + 1);
    prop_assert_eq!(mat.ptr[0], 0);
    for w in mat.ptr.windows(2) {
        prop_assert!(w[0] <= w[1]);
    }
    prop_assert_eq!(mat.ptr[mat.major_dim], mat.ind.len());
    prop_assert_eq!(mat.ind.len(), mat.values.len());

    for major in 0..mat.major_dim {
        let (ind, values) = mat.row(major);
        // Strictly ascending minors, in bounds, no stored zeros.
        for w in ind.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for &minor in ind {
            prop_assert!(minor < mat.minor_dim);
        }
        for &v in values {
            prop_assert!(v != 0.0);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_from_coo_is_canonical((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);
        assert_canonical(&mat)?;
    }

    #[test]
    fn test_value_sum_is_conserved((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);

        // Integer-valued f32 sums are exact, so conservation is bitwise.
        let coo_sum: f32 = triplets.iter().map(|t| t.2).sum();
        let stored_sum: f32 = mat.values.iter().sum();
        prop_assert_eq!(coo_sum, stored_sum);
    }

    #[test]
    fn test_transpose_round_trips((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);
        let round_tripped = mat.transpose().transpose();
        prop_assert_eq!(round_tripped, mat);
    }

    #[test]
    fn test_transpose_is_canonical((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);
        assert_canonical(&mat.transpose())?;
    }

    #[test]
    fn test_compression_is_idempotent((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);

        // Feed the canonical matrix back through the builder as triplets:
        // a second compression must be a fixed point.
        let mut majors = Vec::new();
        let mut minors = Vec::new();
        let mut values = Vec::new();
        for major in 0..mat.major_dim {
            let (ind, vals) = mat.row(major);
            for (m, v) in ind.iter().zip(vals) {
                majors.push(major);
                minors.push(*m);
                values.push(*v);
            }
        }
        let rebuilt =
            CompMatrix::from_coo(mat.major_dim, mat.minor_dim, &majors, &minors, &values)
                .unwrap();
        prop_assert_eq!(rebuilt, mat);
    }

    #[test]
    fn test_cosine_similarity_is_symmetric((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);
        let centered = mat.mean_centered();
        let norms = centered.row_norms();

        for a in 0..centered.major_dim {
            for b in 0..centered.major_dim {
                let ab = cosine_sim(&centered, &norms, a, b);
                let ba = cosine_sim(&centered, &norms, b, a);
                prop_assert!(
                    (ab - ba).abs() < 1e-6,
                    "cosine not symmetric for rows {} and {}: {} vs {}",
                    a, b, ab, ba
                );
            }
        }
    }

    #[test]
    fn test_centering_preserves_layout((major_dim, minor_dim, triplets) in coo_strategy()) {
        let mat = build(major_dim, minor_dim, &triplets);
        let centered = mat.mean_centered();

        prop_assert_eq!(&centered.ptr, &mat.ptr);
        prop_assert_eq!(&centered.ind, &mat.ind);

        // Each centered row sums to ~0 (or is empty).
        for major in 0..centered.major_dim {
            let (_, values) = centered.row(major);
            if !values.is_empty() {
                let sum: f32 = values.iter().sum();
                prop_assert!(sum.abs() < 1e-3 * values.len() as f32);
            }
        }
    }
}
