//! Nearest-neighbor constructive heuristic.
//!
//! Builds the tour greedily: from the current node, always move to the
//! nearest unvisited node, then close the cycle back to the start.
//!
//! # Tie-break
//!
//! Candidates are scanned in ascending index order and only a strictly
//! shorter distance replaces the incumbent, so among equally near nodes the
//! lowest index wins.
//!
//! # Complexity
//!
//! O(n²) distance lookups: one full unvisited scan per step.

use log::{debug, trace};

use crate::distance::Distances;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Builds a nearest-neighbor tour starting and ending at node 0.
///
/// A single-node instance yields the trivial tour `[0, 0]`.
///
/// # Errors
///
/// [`Error::EmptyInstance`] if `distances.dimension()` is 0.
///
/// # Examples
///
/// ```
/// use tsplib_nn::constructive::nearest_neighbor;
/// use tsplib_nn::distance::EdgeWeightFormat;
/// use tsplib_nn::instance::ProblemInstance;
///
/// let inst = ProblemInstance::new(
///     4,
///     EdgeWeightFormat::UpperDiagRow,
///     vec![0, 10, 15, 20, 0, 35, 25, 0, 30, 0],
/// )
/// .unwrap();
/// let tour = nearest_neighbor(&inst).unwrap();
/// assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
/// ```
pub fn nearest_neighbor<D: Distances + ?Sized>(distances: &D) -> Result<Tour> {
    nearest_neighbor_from(distances, 0)
}

/// Builds a nearest-neighbor tour starting and ending at `start`.
///
/// # Errors
///
/// - [`Error::EmptyInstance`] if `distances.dimension()` is 0
/// - [`Error::InvalidStart`] if `start` is not below the dimension
pub fn nearest_neighbor_from<D: Distances + ?Sized>(distances: &D, start: usize) -> Result<Tour> {
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

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut order = Vec::with_capacity(n + 1);
    order.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut best: Option<(usize, i64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = distances.distance(current, candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }

        match best {
            Some((next, d)) => {
                trace!("nearest neighbor step: {current} -> {next} ({d})");
                visited[next] = true;
                order.push(next);
                current = next;
            }
            None => break,
        }
    }

    debug!("nearest neighbor tour built: start={start} nodes={}", order.len());
    Ok(Tour::closed(order))
}
