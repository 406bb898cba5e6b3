//! Weighted recommendation aggregation over a user's neighborhood.

use cofi_sparse::CompMatrix;

use crate::accum::ItemAccumulator;
use crate::heap::Neighbor;

/// Score the items `user` has not rated from its neighbors' centered
/// ratings.
///
/// For each neighbor v, the user's and v's sorted item rows are merged with
/// two cursors: items both rated are skipped, items only v rated contribute
/// `sim * value` to the item's weighted sum and `sim` to its weight sum.
/// Only v's tail is drained after the merge; whatever remains of the user's
/// row is already rated and can never be recommended.
///
/// Returns `(item, weighted_sum / weight_sum)` pairs in the accumulator's
/// bucket order, which is not stable across runs with different neighbor
/// sets.
pub fn recommend_for_user(
    mat: &CompMatrix,
    neighborhood: &[Neighbor],
    user: usize,
) -> Vec<(usize, f32)> {
    let mut items = ItemAccumulator::new();
    let (user_ind, _) = mat.row(user);

    for neighbor in neighborhood {
        let (nb_ind, nb_values) = mat.row(neighbor.id);

        let mut i = 0;
        let mut j = 0;
        while i < user_ind.len() && j < nb_ind.len() {
            if user_ind[i] < nb_ind[j] {
                i += 1;
            } else if user_ind[i] == nb_ind[j] {
                i += 1;
                j += 1;
            } else {
                items.accumulate(nb_ind[j], neighbor.sim * nb_values[j], neighbor.sim);
                j += 1;
            }
        }
        while j < nb_ind.len() {
            items.accumulate(nb_ind[j], neighbor.sim * nb_values[j], neighbor.sim);
            j += 1;
        }
    }

    items.iter().map(|(item, acc)| (item, acc.score())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofi_sparse::{cosine_sim, CompMatrix};

    fn build(nrows: usize, ncols: usize, triplets: &[(usize, usize, f32)]) -> CompMatrix {
        let majors: Vec<usize> = triplets.iter().map(|t| t.0).collect();
        let minors: Vec<usize> = triplets.iter().map(|t| t.1).collect();
        let values: Vec<f32> = triplets.iter().map(|t| t.2).collect();
        CompMatrix::from_coo(nrows, ncols, &majors, &minors, &values).unwrap()
    }

    #[test]
    fn test_rated_items_are_never_recommended() {
        let centered = build(
            2,
            3,
            &[(0, 0, 1.0), (1, 0, 1.0), (1, 1, -1.0), (1, 2, 2.0)],
        )
        .mean_centered();
        let neighborhood = [Neighbor { id: 1, sim: 0.5 }];

        let recs = recommend_for_user(&centered, &neighborhood, 0);
        let items: Vec<usize> = recs.iter().map(|r| r.0).collect();
        assert!(!items.contains(&0));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_weighted_average_over_neighbors() {
        // Users 1 and 2 both rate item 2, user 0 does not; the score is the
        // similarity-weighted average of their centered ratings.
        let mat = build(
            3,
            3,
            &[
                (0, 0, 5.0),
                (0, 1, 3.0),
                (1, 0, 4.0),
                (1, 1, 2.0),
                (1, 2, 1.0),
                (2, 1, 5.0),
                (2, 2, 5.0),
            ],
        );
        let centered = mat.mean_centered();
        let norms = centered.row_norms();

        let sim01 = cosine_sim(&centered, &norms, 0, 1);
        let sim02 = cosine_sim(&centered, &norms, 0, 2);
        assert!(sim01 > 0.0);

        let mut neighborhood = vec![Neighbor { id: 1, sim: sim01 }];
        if sim02 > 0.0 {
            neighborhood.push(Neighbor { id: 2, sim: sim02 });
        }
        neighborhood.sort_by(|a, b| b.sim.total_cmp(&a.sim));

        let recs = recommend_for_user(&centered, &neighborhood, 0);
        let (_, score) = recs.iter().find(|r| r.0 == 2).copied().unwrap();

        let centered_of = |row: usize, col: usize| {
            let (ind, values) = centered.row(row);
            values[ind.iter().position(|&c| c == col).unwrap()]
        };
        let mut expected_num = sim01 * centered_of(1, 2);
        let mut expected_den = sim01;
        if sim02 > 0.0 {
            expected_num += sim02 * centered_of(2, 2);
            expected_den += sim02;
        }
        assert!((score - expected_num / expected_den).abs() < 1e-6);
    }

    #[test]
    fn test_empty_neighborhood_yields_no_recommendations() {
        let centered = build(2, 2, &[(0, 0, 1.0), (1, 1, 1.0)]).mean_centered();
        assert!(recommend_for_user(&centered, &[], 0).is_empty());
    }
}
