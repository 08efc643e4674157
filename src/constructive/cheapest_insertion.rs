//! Cheapest-insertion constructive heuristic.
//!
//! Starts from the single-node cycle `[start]` and repeatedly inserts the
//! unvisited node whose insertion raises the cycle length the least:
//!
//! ```text
//! increase(k, prev, next) = d(prev, k) + d(k, next) - d(prev, next)
//! ```
//!
//! Pairs are scanned node-major in ascending order, then by insertion
//! position; only a strictly smaller increase replaces the incumbent.
//!
//! # Complexity
//!
//! O(n³): n insertions, each scanning every (node, position) pair.

use log::debug;

use crate::distance::Distances;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Builds a cheapest-insertion tour starting and ending at `start`.
///
/// # Errors
///
/// - [`Error::EmptyInstance`] if `distances.dimension()` is 0
/// - [`Error::InvalidStart`] if `start` is not below the dimension
/// - [`Error::WeightOverflow`] if an insertion cost leaves the `i64` range
///
/// # Examples
///
/// ```
/// use tsplib_nn::constructive::cheapest_insertion;
/// use tsplib_nn::distance::DistanceMatrix;
/// use tsplib_nn::evaluation::tour_length;
///
/// // Square corners 0..4 in order: sides 2, diagonals 3.
/// let mut dm = DistanceMatrix::new(4);
/// for (a, b, d) in [(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 0, 2), (0, 2, 3), (1, 3, 3)] {
///     dm.set_symmetric(a, b, d);
/// }
/// let tour = cheapest_insertion(&dm, 0).unwrap();
/// assert_eq!(tour.path(), &[0, 3, 2, 1, 0]);
/// assert_eq!(tour_length(&tour, &dm).unwrap(), 8);
/// ```
pub fn cheapest_insertion<D: Distances + ?Sized>(distances: &D, start: usize) -> Result<Tour> {
    let n = distances.dimension();
    if n == 0 {
        return Err(Error::EmptyInstance);
    }
    if start >= n {
        return Err(Error::InvalidStart {
            start,
            dimension: n,
        });
    }

    let mut inserted = vec![false; n];
    inserted[start] = true;
    let mut cycle = Vec::with_capacity(n + 1);
    cycle.push(start);

    while cycle.len() < n {
        let mut best: Option<(usize, usize, i64)> = None;
        for node in 0..n {
            if inserted[node] {
                continue;
            }
            for pos in 0..cycle.len() {
                let prev = cycle[pos];
                let next = cycle[(pos + 1) % cycle.len()];
                let increase = insertion_cost(distances, prev, node, next)?;
                match best {
                    Some((_, _, best_inc)) if increase >= best_inc => {}
                    _ => best = Some((node, pos + 1, increase)),
                }
            }
        }

        match best {
            Some((node, at, _)) => {
                cycle.insert(at, node);
                inserted[node] = true;
            }
            None => break,
        }
    }

    debug!("cheapest insertion tour built: start={start} nodes={}", cycle.len());
    Ok(Tour::closed(cycle))
}

fn insertion_cost<D: Distances + ?Sized>(
    distances: &D,
    prev: usize,
    node: usize,
    next: usize,
) -> Result<i64> {
    distances
        .distance(prev, node)
        .checked_add(distances.distance(node, next))
        .and_then(|added| added.checked_sub(distances.distance(prev, next)))
        .ok_or(Error::WeightOverflow)
}
