//! Parallel top-K neighbor search.
//!
//! One pool task per user scans every other row of the centered matrix,
//! keeps the K best strictly-positive cosine similarities in a bounded
//! min-heap, and stores the result descending into that user's slot of the
//! shared neighborhood table. The matrix and norms are read-only during the
//! scan; pool shutdown is the barrier that makes every slot visible to the
//! caller.

use std::sync::{Arc, Mutex, PoisonError};

use cofi_pool::{PoolError, WorkerPool};
use cofi_sparse::{cosine_sim, CompMatrix};

use crate::heap::{Neighbor, TopK};

/// A user's neighbors, sorted by similarity descending. Empty when no other
/// user shares a positive similarity.
pub type Neighborhood = Vec<Neighbor>;

/// Compute the top-`k` neighborhood of every user of `mat` on `nworkers`
/// threads.
///
/// `mat` is expected to be mean-centered and `norms` must come from
/// [`CompMatrix::row_norms`] on it.
///
/// # Errors
///
/// Returns [`PoolError`] if the pool cannot be brought up; individual task
/// failures are not errors and leave the affected user's neighborhood
/// empty.
pub fn find_neighborhoods(
    mat: &Arc<CompMatrix>,
    norms: &Arc<Vec<f32>>,
    k: usize,
    nworkers: usize,
) -> Result<Vec<Neighborhood>, PoolError> {
    let nrows = mat.major_dim;
    let slots: Arc<Vec<Mutex<Neighborhood>>> =
        Arc::new((0..nrows).map(|_| Mutex::new(Vec::new())).collect());

    let mut pool = WorkerPool::new(nworkers)?;
    for user in 0..nrows {
        let mat = Arc::clone(mat);
        let norms = Arc::clone(norms);
        let slots = Arc::clone(&slots);
        pool.submit(move || search_task(&mat, &norms, k, user, &slots))?;
    }
    pool.shutdown();

    let neighborhoods = slots
        .iter()
        .map(|slot| {
            // A slot poisoned by a failed task stays empty.
            std::mem::take(&mut *slot.lock().unwrap_or_else(PoisonError::into_inner))
        })
        .collect();
    Ok(neighborhoods)
}

fn search_task(
    mat: &CompMatrix,
    norms: &[f32],
    k: usize,
    user: usize,
    slots: &[Mutex<Neighborhood>],
) {
    let mut heap = TopK::new(k);

    for other in 0..mat.major_dim {
        if other == user {
            continue;
        }
        let sim = cosine_sim(mat, norms, user, other);
        if sim <= 0.0 {
            continue;
        }

        if !heap.is_full() {
            heap.insert(Neighbor { id: other, sim });
        } else if heap.peek_min().is_some_and(|min| sim > min.sim) {
            heap.replace_min(Neighbor { id: other, sim });
        }
    }

    *slots[user].lock().unwrap_or_else(PoisonError::into_inner) = heap.into_sorted_desc();
}
