//! Constructive heuristics for building a closed tour.
//!
//! - [`nearest_neighbor`]: Greedy nearest unvisited node, O(n²)
//! - [`cheapest_insertion`]: Minimum-increase insertion, O(n³)

mod cheapest_insertion;
mod nearest_neighbor;

pub use cheapest_insertion::cheapest_insertion;
pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_from};
