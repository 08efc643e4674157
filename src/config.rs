//! Solver configuration.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which constructive heuristic builds the tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Greedy nearest unvisited node.
    #[default]
    NearestNeighbor,
    /// Minimum-increase insertion.
    CheapestInsertion,
}

impl Heuristic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest-neighbor",
            Self::CheapestInsertion => "cheapest-insertion",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`solve`](crate::solver::solve).
///
/// The default is nearest neighbor from node 0.
///
/// ```
/// use tsplib_nn::config::{Heuristic, SolveConfig};
///
/// let cfg: SolveConfig = serde_json::from_str(r#"{"heuristic": "cheapest-insertion"}"#).unwrap();
/// assert_eq!(cfg.heuristic, Heuristic::CheapestInsertion);
/// assert_eq!(cfg.start, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    pub heuristic: Heuristic,
    /// Node the tour starts and ends at.
    pub start: usize,
}

impl SolveConfig {
    pub fn new(heuristic: Heuristic, start: usize) -> Self {
        Self { heuristic, start }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let cfg = SolveConfig::default();
        assert_eq!(cfg.heuristic, Heuristic::NearestNeighbor);
        assert_eq!(cfg.start, 0);
    }

    #[test]
    fn test_names_agree() {
        for h in [Heuristic::NearestNeighbor, Heuristic::CheapestInsertion] {
            let json = serde_json::to_string(&h).unwrap();
            assert_eq!(json, format!("\"{h}\""));
            let value = h.to_possible_value().unwrap();
            assert_eq!(value.get_name(), h.as_str());
        }
    }

    #[test]
    fn test_empty_object_is_default() {
        let cfg: SolveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SolveConfig::default());
    }
}
