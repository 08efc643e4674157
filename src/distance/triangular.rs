//! Triangular storage layouts and their flat-index arithmetic.
//!
//! Both layouts keep the diagonal, so an instance of dimension `n` stores
//! `n * (n + 1) / 2` values.
//!
//! ```text
//! UPPER_DIAG_ROW (n = 4)        LOWER_DIAG_ROW (n = 4)
//!  0  1  2  3                    0
//!     4  5  6                    1  2
//!        7  8                    3  4  5
//!           9                    6  7  8  9
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which half of the symmetric matrix is stored, and in which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeWeightFormat {
    /// Row-major upper triangle, each row starting at its diagonal cell.
    UpperDiagRow,
    /// Row-major lower triangle, each row ending at its diagonal cell.
    LowerDiagRow,
}

impl EdgeWeightFormat {
    /// The TSPLIB keyword for this layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpperDiagRow => "UPPER_DIAG_ROW",
            Self::LowerDiagRow => "LOWER_DIAG_ROW",
        }
    }
}

impl fmt::Display for EdgeWeightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeWeightFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "UPPER_DIAG_ROW" => Ok(Self::UpperDiagRow),
            "LOWER_DIAG_ROW" => Ok(Self::LowerDiagRow),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Number of stored values for a diagonal-inclusive triangle of `dimension` rows.
///
/// Returns `None` when the count does not fit in `usize`.
///
/// ```
/// use tsplib_nn::distance::triangular_len;
///
/// assert_eq!(triangular_len(4), Some(10));
/// assert_eq!(triangular_len(1), Some(1));
/// assert_eq!(triangular_len(0), Some(0));
/// assert_eq!(triangular_len(usize::MAX), None);
/// ```
pub fn triangular_len(dimension: usize) -> Option<usize> {
    dimension
        .checked_add(1)?
        .checked_mul(dimension)
        .map(|twice| twice / 2)
}

/// Flat position of cell `(i, j)` in a triangle stored with `format`.
///
/// The pair is first oriented into the stored half (`i <= j` for the upper
/// layout, `i >= j` for the lower one), so the result is the same for
/// `(i, j)` and `(j, i)`. Diagonal cells map to their stored slot.
///
/// Both indices must be below `dimension`; the result is then always below
/// the value of [`triangular_len`]`(dimension)`.
///
/// ```
/// use tsplib_nn::distance::{triangular_index, EdgeWeightFormat};
///
/// let upper = EdgeWeightFormat::UpperDiagRow;
/// assert_eq!(triangular_index(0, 1, 4, upper), 1);
/// assert_eq!(triangular_index(2, 1, 4, upper), 5);
///
/// let lower = EdgeWeightFormat::LowerDiagRow;
/// assert_eq!(triangular_index(1, 0, 4, lower), 1);
/// assert_eq!(triangular_index(2, 3, 4, lower), 8);
/// ```
pub fn triangular_index(i: usize, j: usize, dimension: usize, format: EdgeWeightFormat) -> usize {
    match format {
        EdgeWeightFormat::UpperDiagRow => {
            let (i, j) = if i <= j { (i, j) } else { (j, i) };
            i * dimension - i * (i + 1) / 2 + j
        }
        EdgeWeightFormat::LowerDiagRow => {
            let (i, j) = if i >= j { (i, j) } else { (j, i) };
            i * (i + 1) / 2 + j
        }
    }
}
