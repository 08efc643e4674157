//! Seeded random instances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::{DistanceMatrix, EdgeWeightFormat};
use crate::error::{Error, Result};
use crate::instance::ProblemInstance;

/// Generates a symmetric instance with off-diagonal weights drawn uniformly
/// from `1..=max_weight` and a zero diagonal.
///
/// The same `seed` always yields the same instance.
///
/// # Errors
///
/// [`Error::EmptyInstance`] if `dimension` is 0.
///
/// # Examples
///
/// ```
/// use tsplib_nn::distance::{Distances, EdgeWeightFormat};
/// use tsplib_nn::generate::random_instance;
///
/// let inst = random_instance(6, EdgeWeightFormat::LowerDiagRow, 100, 42).unwrap();
/// assert_eq!(inst.dimension(), 6);
/// assert!((1..=100).contains(&inst.distance(0, 5)));
/// assert_eq!(inst, random_instance(6, EdgeWeightFormat::LowerDiagRow, 100, 42).unwrap());
/// ```
pub fn random_instance(
    dimension: usize,
    format: EdgeWeightFormat,
    max_weight: u32,
    seed: u64,
) -> Result<ProblemInstance> {
    if dimension == 0 {
        return Err(Error::EmptyInstance);
    }
    let max_weight = i64::from(max_weight.max(1));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dm = DistanceMatrix::new(dimension);
    for i in 0..dimension {
        for j in (i + 1)..dimension {
            dm.set_symmetric(i, j, rng.random_range(1..=max_weight));
        }
    }
    Ok(ProblemInstance::from_matrix(&dm, format)?.with_name(format!("random{dimension}")))
}
