//! Compressed sparse matrix engine for collaborative filtering.
//!
//! Converts an unordered coordinate triplet stream into a canonical
//! compressed (ptr/ind/values) matrix and provides the row-level operations
//! the recommender pipeline is built on.
//!
//! # Representation
//!
//! [`CompMatrix`] stores major slices contiguously with sorted, unique minor
//! indices and no stored zeros. [`CooMatrix`] is the loader-facing triplet
//! form; compression coalesces duplicate coordinates (summing their values)
//! and eliminates explicit zeros.
//!
//! # Operations
//!
//! - [`CompMatrix::from_coo`] / [`CooMatrix::to_comp`]: COO -> compressed
//! - [`CompMatrix::transpose`]: swap major and minor dimensions
//! - [`CompMatrix::mean_centered`]: subtract per-row means over stored values
//! - [`CompMatrix::row_norms`]: per-row L2 norms
//! - [`cosine_sim`]: merge-based cosine similarity between two rows
//!
//! # Example
//!
//! ```rust
//! use cofi_sparse::{cosine_sim, CooMatrix};
//!
//! let mut ratings = CooMatrix::new(2, 3);
//! ratings.push(0, 0, 4.0);
//! ratings.push(0, 1, 2.0);
//! ratings.push(1, 0, 5.0);
//! ratings.push(1, 1, 1.0);
//!
//! let mat = ratings.to_comp()?;
//! let centered = mat.mean_centered();
//! let norms = centered.row_norms();
//! let sim = cosine_sim(&centered, &norms, 0, 1);
//! assert!(sim > 0.0);
//! # Ok::<(), cofi_sparse::MatrixError>(())
//! ```

mod center;
mod comp;
mod coo;
mod similarity;

/// Error types for matrix construction.
pub mod error;

pub use comp::CompMatrix;
pub use coo::CooMatrix;
pub use error::MatrixError;
pub use similarity::cosine_sim;
