//! Distance lookup over stored edge weights.
//!
//! Provides the triangular index arithmetic used by explicit TSPLIB
//! instances, a dense matrix for expanded views, and the [`Distances`]
//! trait that tour construction is written against.

mod matrix;
mod triangular;

pub use matrix::DistanceMatrix;
pub use triangular::{triangular_index, triangular_len, EdgeWeightFormat};

/// Symmetric distance lookup over nodes `0..dimension()`.
///
/// Implementations must return 0 for `distance(i, i)` regardless of what
/// they store, and the same value for `(i, j)` and `(j, i)`.
pub trait Distances {
    /// Number of nodes.
    fn dimension(&self) -> usize;

    /// Distance between nodes `i` and `j`.
    ///
    /// # Panics
    ///
    /// May panic if either index is not below [`dimension`](Self::dimension).
    fn distance(&self, i: usize, j: usize) -> i64;
}
