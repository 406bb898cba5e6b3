//! Error types for cofi-sparse.

use std::fmt;

/// Errors that can occur while building a compressed matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A coordinate triplet referenced a position outside the matrix.
    IndexOutOfBounds {
        major: usize,
        minor: usize,
        major_dim: usize,
        minor_dim: usize,
    },
    /// The triplet arrays have different lengths.
    TripletLengthMismatch {
        majors: usize,
        minors: usize,
        values: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds {
                major,
                minor,
                major_dim,
                minor_dim,
            } => {
                write!(
                    f,
                    "Index ({}, {}) out of bounds for a {} x {} matrix",
                    major, minor, major_dim, minor_dim
                )
            }
            MatrixError::TripletLengthMismatch {
                majors,
                minors,
                values,
            } => {
                write!(
                    f,
                    "Triplet arrays have mismatched lengths: {} majors, {} minors, {} values",
                    majors, minors, values
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}
