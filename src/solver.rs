//! Build-then-evaluate entry point.

use log::debug;

use crate::config::{Heuristic, SolveConfig};
use crate::constructive::{cheapest_insertion, nearest_neighbor_from};
use crate::distance::Distances;
use crate::error::Result;
use crate::evaluation::tour_length;
use crate::models::Solution;

/// Builds a tour with the configured heuristic and measures it.
///
/// Nothing partial is returned: on error there is no tour and no length.
///
/// # Examples
///
/// ```
/// use tsplib_nn::config::SolveConfig;
/// use tsplib_nn::instance::ProblemInstance;
/// use tsplib_nn::solver::solve;
///
/// let inst: ProblemInstance = "\
/// DIMENSION : 3
/// EDGE_WEIGHT_FORMAT : LOWER_DIAG_ROW
/// EDGE_WEIGHT_SECTION
/// 0
/// 4 0
/// 9 2 0
/// EOF
/// "
/// .parse()
/// .unwrap();
/// let sol = solve(&inst, &SolveConfig::default()).unwrap();
/// assert_eq!(sol.tour().path(), &[0, 1, 2, 0]);
/// assert_eq!(sol.length(), 15);
/// ```
pub fn solve<D: Distances + ?Sized>(distances: &D, config: &SolveConfig) -> Result<Solution> {
    let tour = match config.heuristic {
        Heuristic::NearestNeighbor => nearest_neighbor_from(distances, config.start)?,
        Heuristic::CheapestInsertion => cheapest_insertion(distances, config.start)?,
    };
    let length = tour_length(&tour, distances)?;
    debug!("{} tour length {length}", config.heuristic);
    Ok(Solution::new(tour, length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, EdgeWeightFormat};
    use crate::error::Error;
    use crate::instance::ProblemInstance;

    fn four_upper() -> ProblemInstance {
        ProblemInstance::new(
            4,
            EdgeWeightFormat::UpperDiagRow,
            vec![0, 10, 15, 20, 0, 35, 25, 0, 30, 0],
        )
        .expect("valid")
    }

    #[test]
    fn test_solve_default() {
        let sol = solve(&four_upper(), &SolveConfig::default()).unwrap();
        assert_eq!(sol.tour().path(), &[0, 1, 3, 2, 0]);
        assert_eq!(sol.length(), 80);
    }

    #[test]
    fn test_solve_cheapest_insertion() {
        let cfg = SolveConfig::new(Heuristic::CheapestInsertion, 0);
        let sol = solve(&four_upper(), &cfg).unwrap();
        assert_eq!(sol.tour().path(), &[0, 2, 3, 1, 0]);
        assert_eq!(sol.length(), 80);
    }

    #[test]
    fn test_solve_errors_propagate() {
        let err = solve(&DistanceMatrix::new(0), &SolveConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyInstance));
        let err = solve(&four_upper(), &SolveConfig::new(Heuristic::NearestNeighbor, 7)).unwrap_err();
        assert!(matches!(err, Error::InvalidStart { start: 7, .. }));
    }

    #[test]
    fn test_solve_overflowing_length() {
        let inst = ProblemInstance::new(
            3,
            EdgeWeightFormat::LowerDiagRow,
            vec![0, i64::MAX, 0, i64::MAX, i64::MAX, 0],
        )
        .unwrap();
        for heuristic in [Heuristic::NearestNeighbor, Heuristic::CheapestInsertion] {
            let err = solve(&inst, &SolveConfig::new(heuristic, 0)).unwrap_err();
            assert!(matches!(err, Error::WeightOverflow), "{heuristic}");
        }
    }
}
