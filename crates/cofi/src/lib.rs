//! # cofi
//!
//! User-based collaborative filtering over sparse rating matrices.
//!
//! This crate is the entry point for the `cofi-*` workspace:
//! 1. **Facade**: re-exports [`cofi_sparse`], [`cofi_pool`], and
//!    [`cofi_knn`] under one namespace.
//! 2. **Glue**: the binary ratings-file reader ([`io`]) and the `cofi` CLI
//!    binary that runs the full pipeline.
//!
//! # Pipeline
//!
//! 1. **Load** (`io`): binary COO triplets -> [`sparse::CooMatrix`].
//! 2. **Compress** (`sparse`): canonical ptr/ind/values matrix, duplicates
//!    coalesced, zeros dropped.
//! 3. **Center** (`sparse`): subtract each user's mean rating over the
//!    items they rated.
//! 4. **Search** (`knn` over `pool`): per-user top-K neighbors by cosine
//!    similarity, one worker task per user.
//! 5. **Aggregate** (`knn`): similarity-weighted scores for the items each
//!    user has not rated.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cofi::prelude::*;
//!
//! let mut ratings = CooMatrix::new(2, 2);
//! ratings.push(0, 0, 5.0);
//! ratings.push(0, 1, 1.0);
//! ratings.push(1, 0, 4.0);
//!
//! let centered = Arc::new(ratings.to_comp()?.mean_centered());
//! let norms = Arc::new(centered.row_norms());
//! let neighborhoods = find_neighborhoods(&centered, &norms, 30, 2)?;
//! let recs = recommend_for_user(&centered, &neighborhoods[1], 1);
//! # let _ = recs;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Binary ratings file reader.
pub mod io;

/// Re-exports of core crates.
pub mod sparse {
    pub use cofi_sparse::*;
}

pub mod pool {
    pub use cofi_pool::*;
}

pub mod knn {
    pub use cofi_knn::*;
}

pub mod prelude {
    pub use crate::io::{read_coo, read_coo_from};
    pub use crate::knn::{
        find_neighborhoods, recommend_for_user, ItemAccumulator, Neighbor, Neighborhood, TopK,
    };
    pub use crate::pool::{PoolError, WorkerPool};
    pub use crate::sparse::{cosine_sim, CompMatrix, CooMatrix, MatrixError};
}
