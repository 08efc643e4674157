//! Closed tour type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed tour: every node once, then back to the first.
///
/// The path has `dimension + 1` entries; the last repeats the first.
///
/// # Examples
///
/// ```
/// use tsplib_nn::models::Tour;
///
/// let tour = Tour::closed(vec![0, 2, 1]);
/// assert_eq!(tour.path(), &[0, 2, 1, 0]);
/// assert_eq!(tour.num_nodes(), 3);
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 0)]);
/// assert!(tour.validate(3).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    path: Vec<usize>,
}

impl Tour {
    /// Closes a visiting order by appending its first node.
    pub fn closed(mut order: Vec<usize>) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self { path: order }
    }

    /// Wraps an already closed path without checking it.
    pub fn from_path(path: Vec<usize>) -> Self {
        Self { path }
    }

    /// The full path including the closing node.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The visiting order without the closing node.
    pub fn order(&self) -> &[usize] {
        match self.path.split_last() {
            Some((_, order)) => order,
            None => &[],
        }
    }

    /// Node the tour starts and ends at.
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Number of distinct visits (the closing node is not counted).
    pub fn num_nodes(&self) -> usize {
        self.order().len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consecutive `(from, to)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Checks that the tour visits each of `0..dimension` exactly once and
    /// returns to its start.
    pub fn validate(&self, dimension: usize) -> Result<()> {
        if self.path.len() != dimension + 1 {
            return Err(Error::invalid_tour(format!(
                "path has {} entries, expected {}",
                self.path.len(),
                dimension + 1
            )));
        }
        if self.path.first() != self.path.last() {
            return Err(Error::invalid_tour("path does not return to its start"));
        }
        let mut seen = vec![false; dimension];
        for &node in self.order() {
            match seen.get_mut(node) {
                None => {
                    return Err(Error::invalid_tour(format!(
                        "node {node} out of range for dimension {dimension}"
                    )))
                }
                Some(slot) if *slot => {
                    return Err(Error::invalid_tour(format!("node {node} visited twice")))
                }
                Some(slot) => *slot = true,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<String> = self.path.iter().map(usize::to_string).collect();
        f.write_str(&nodes.join(" -> "))
    }
}
