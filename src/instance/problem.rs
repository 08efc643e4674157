//! The decoded problem instance.

use serde::{Deserialize, Serialize};

use crate::distance::{triangular_index, triangular_len, DistanceMatrix, Distances, EdgeWeightFormat};
use crate::error::{Error, Result};

/// A symmetric TSP instance stored as one diagonal-inclusive triangle.
///
/// The weight count is checked on construction, so every lookup with
/// indices below [`dimension`](Self::dimension) stays in bounds.
///
/// # Examples
///
/// ```
/// use tsplib_nn::distance::{Distances, EdgeWeightFormat};
/// use tsplib_nn::instance::ProblemInstance;
///
/// let inst = ProblemInstance::new(
///     3,
///     EdgeWeightFormat::UpperDiagRow,
///     vec![0, 4, 9, 0, 2, 0],
/// )
/// .unwrap();
/// assert_eq!(inst.distance(0, 2), 9);
/// assert_eq!(inst.distance(2, 1), 2);
/// assert_eq!(inst.distance(1, 1), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct ProblemInstance {
    name: Option<String>,
    comment: Option<String>,
    dimension: usize,
    format: EdgeWeightFormat,
    weights: Vec<i64>,
}

/// Deserialized fields before the weight count is checked.
#[derive(Deserialize)]
struct RawInstance {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    dimension: usize,
    format: EdgeWeightFormat,
    weights: Vec<i64>,
}

impl TryFrom<RawInstance> for ProblemInstance {
    type Error = Error;

    fn try_from(raw: RawInstance) -> Result<Self> {
        let mut inst = Self::new(raw.dimension, raw.format, raw.weights)?;
        inst.name = raw.name;
        inst.comment = raw.comment;
        Ok(inst)
    }
}

impl ProblemInstance {
    /// Builds an instance, rejecting a zero dimension or a weight count
    /// other than `dimension * (dimension + 1) / 2`.
    pub fn new(dimension: usize, format: EdgeWeightFormat, weights: Vec<i64>) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::EmptyInstance);
        }
        let expected = triangular_len(dimension)
            .ok_or_else(|| Error::malformed_header(format!("dimension {dimension} is too large")))?;
        let found = weights.len();
        if found < expected {
            return Err(Error::TruncatedData { expected, found });
        }
        if found > expected {
            return Err(Error::SurplusData { expected, found });
        }
        Ok(Self {
            name: None,
            comment: None,
            dimension,
            format,
            weights,
        })
    }

    /// Packs the triangle of a dense matrix selected by `format`.
    ///
    /// Only the stored half is read, so an asymmetric matrix loses its
    /// other half.
    pub fn from_matrix(matrix: &DistanceMatrix, format: EdgeWeightFormat) -> Result<Self> {
        let n = matrix.size();
        let mut weights = Vec::with_capacity(triangular_len(n).unwrap_or(0));
        for i in 0..n {
            match format {
                EdgeWeightFormat::UpperDiagRow => weights.extend((i..n).map(|j| matrix.get(i, j))),
                EdgeWeightFormat::LowerDiagRow => weights.extend((0..=i).map(|j| matrix.get(i, j))),
            }
        }
        Self::new(n, format, weights)
    }

    /// Attaches a `NAME` value.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches a `COMMENT` value.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The `NAME` value, if the source declared one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The `COMMENT` value, if the source declared one.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Number of nodes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Layout of the stored triangle.
    pub fn format(&self) -> EdgeWeightFormat {
        self.format
    }

    /// The stored triangle in file order.
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Expands the triangle into a full symmetric matrix.
    ///
    /// The diagonal is written as 0 whatever the file stores there.
    pub fn to_matrix(&self) -> DistanceMatrix {
        let n = self.dimension;
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                dm.set_symmetric(i, j, self.distance(i, j));
            }
        }
        dm
    }
}

impl Distances for ProblemInstance {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn distance(&self, i: usize, j: usize) -> i64 {
        if i == j {
            return 0;
        }
        self.weights[triangular_index(i, j, self.dimension, self.format)]
    }
}
