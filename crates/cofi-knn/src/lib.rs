//! Top-K user neighborhoods and weighted recommendation aggregation.
//!
//! This crate turns a mean-centered rating matrix into per-user
//! recommendations in two stages:
//!
//! 1. **Neighbor search** ([`find_neighborhoods`]): for every user, scan all
//!    other users and keep the K highest strictly-positive cosine
//!    similarities in a bounded min-heap ([`TopK`]). One task per user runs
//!    on a [`cofi_pool::WorkerPool`]; the pool join is the only
//!    synchronization the phase needs.
//! 2. **Aggregation** ([`recommend_for_user`]): sequentially merge the
//!    user's rated items against each neighbor's, accumulating
//!    similarity-weighted scores for unseen items in a chained hash map
//!    ([`ItemAccumulator`]).
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cofi_knn::{find_neighborhoods, recommend_for_user};
//! use cofi_sparse::CooMatrix;
//!
//! let mut ratings = CooMatrix::new(3, 3);
//! for &(user, item, rating) in &[
//!     (0, 0, 5.0),
//!     (0, 1, 3.0),
//!     (1, 0, 4.0),
//!     (1, 1, 2.0),
//!     (1, 2, 1.0),
//!     (2, 1, 5.0),
//!     (2, 2, 5.0),
//! ] {
//!     ratings.push(user, item, rating);
//! }
//!
//! let centered = Arc::new(ratings.to_comp()?.mean_centered());
//! let norms = Arc::new(centered.row_norms());
//!
//! let neighborhoods = find_neighborhoods(&centered, &norms, 2, 2)?;
//! let recs = recommend_for_user(&centered, &neighborhoods[0], 0);
//! assert!(recs.iter().any(|&(item, _)| item == 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod accum;
mod aggregate;
mod heap;
mod search;

pub use accum::{Accum, ItemAccumulator};
pub use aggregate::recommend_for_user;
pub use heap::{Neighbor, TopK};
pub use search::{find_neighborhoods, Neighborhood};
