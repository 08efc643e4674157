//! Tour length evaluation.

use crate::distance::Distances;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Sums the distance of every consecutive pair in the tour, including the
/// closing edge back to the start.
///
/// Fails with [`Error::WeightOverflow`] if the sum leaves the `i64` range.
///
/// # Examples
///
/// ```
/// use tsplib_nn::distance::EdgeWeightFormat;
/// use tsplib_nn::evaluation::tour_length;
/// use tsplib_nn::instance::ProblemInstance;
/// use tsplib_nn::models::Tour;
///
/// let inst = ProblemInstance::new(3, EdgeWeightFormat::UpperDiagRow, vec![0, 4, 9, 0, 2, 0]).unwrap();
/// // 0→1 (4) + 1→2 (2) + 2→0 (9)
/// assert_eq!(tour_length(&Tour::closed(vec![0, 1, 2]), &inst).unwrap(), 15);
/// ```
pub fn tour_length<D: Distances + ?Sized>(tour: &Tour, distances: &D) -> Result<i64> {
    tour.edges().try_fold(0i64, |total, (a, b)| {
        total
            .checked_add(distances.distance(a, b))
            .ok_or(Error::WeightOverflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, EdgeWeightFormat};
    use crate::instance::ProblemInstance;

    fn line() -> DistanceMatrix {
        // Nodes on a line at 0, 1, 2, 3.
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                dm.set_symmetric(i, j, (j - i) as i64);
            }
        }
        dm
    }

    #[test]
    fn test_length_includes_closing_edge() {
        let dm = line();
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3
        assert_eq!(tour_length(&Tour::closed(vec![0, 1, 2, 3]), &dm).unwrap(), 6);
    }

    #[test]
    fn test_length_of_trivial_tours() {
        let dm = line();
        assert_eq!(tour_length(&Tour::closed(vec![2]), &dm).unwrap(), 0);
        assert_eq!(tour_length(&Tour::closed(vec![]), &dm).unwrap(), 0);
    }

    #[test]
    fn test_length_is_direction_free() {
        let dm = line();
        let forward = Tour::closed(vec![0, 2, 1, 3]);
        let backward = Tour::closed(vec![0, 3, 1, 2]);
        assert_eq!(
            tour_length(&forward, &dm).unwrap(),
            tour_length(&backward, &dm).unwrap()
        );
    }

    #[test]
    fn test_length_overflow_is_an_error() {
        let inst = ProblemInstance::new(
            3,
            EdgeWeightFormat::UpperDiagRow,
            vec![0, i64::MAX, i64::MAX, 0, i64::MAX, 0],
        )
        .unwrap();
        let err = tour_length(&Tour::closed(vec![0, 1, 2]), &inst).unwrap_err();
        assert!(matches!(err, Error::WeightOverflow));

        let inst = ProblemInstance::new(2, EdgeWeightFormat::LowerDiagRow, vec![0, i64::MIN, 0])
            .unwrap();
        let err = tour_length(&Tour::closed(vec![0, 1]), &inst).unwrap_err();
        assert!(matches!(err, Error::WeightOverflow));
    }

    #[test]
    fn test_length_near_the_limit() {
        let inst = ProblemInstance::new(
            3,
            EdgeWeightFormat::UpperDiagRow,
            vec![0, i64::MAX - 2, 1, 0, 1, 0],
        )
        .unwrap();
        assert_eq!(tour_length(&Tour::closed(vec![0, 1, 2]), &inst).unwrap(), i64::MAX);
    }
}
