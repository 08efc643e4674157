//! Solution and per-instance report types.

use serde::{Deserialize, Serialize};

use super::Tour;
use crate::config::Heuristic;
use crate::distance::EdgeWeightFormat;
use crate::instance::ProblemInstance;

/// A constructed tour together with its total length.
///
/// # Examples
///
/// ```
/// use tsplib_nn::models::{Solution, Tour};
///
/// let sol = Solution::new(Tour::closed(vec![0, 1]), 12);
/// assert_eq!(sol.length(), 12);
/// assert_eq!(sol.tour().path(), &[0, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    tour: Tour,
    length: i64,
}

impl Solution {
    pub fn new(tour: Tour, length: i64) -> Self {
        Self { tour, length }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Sum of every edge in the tour, closing edge included.
    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }
}

/// What the driver prints for one processed instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceReport {
    /// Path or label the instance was read from.
    pub source: String,
    /// `NAME` header, if the file had one.
    pub name: Option<String>,
    pub dimension: usize,
    pub format: EdgeWeightFormat,
    pub heuristic: Heuristic,
    pub tour: Tour,
    pub length: i64,
    /// Wall time for construction and evaluation.
    pub elapsed_ms: f64,
}

impl InstanceReport {
    /// Assembles a report from a solved instance.
    pub fn new(
        source: impl Into<String>,
        instance: &ProblemInstance,
        heuristic: Heuristic,
        solution: Solution,
        elapsed_ms: f64,
    ) -> Self {
        Self {
            source: source.into(),
            name: instance.name().map(str::to_string),
            dimension: instance.dimension(),
            format: instance.format(),
            heuristic,
            length: solution.length(),
            tour: solution.into_tour(),
            elapsed_ms,
        }
    }
}
