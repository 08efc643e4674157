//! Dense distance matrix.

use super::Distances;

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Instances never need this form for solving; it exists to expand a
/// triangular instance for inspection and to seed generated instances.
///
/// # Examples
///
/// ```
/// use tsplib_nn::distance::{DistanceMatrix, Distances};
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_symmetric(0, 1, 5);
/// dm.set_symmetric(1, 2, 7);
/// assert_eq!(dm.get(1, 0), 5);
/// assert_eq!(dm.distance(2, 1), 7);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Returns the stored value for `from` → `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the value for `from` → `to` only.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }

    /// Sets both `a` → `b` and `b` → `a`.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: i64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Distances for DistanceMatrix {
    fn dimension(&self) -> usize {
        self.size
    }

    fn distance(&self, i: usize, j: usize) -> i64 {
        if i == j {
            return 0;
        }
        self.get(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(3);
        dm.set_symmetric(0, 1, 5);
        dm.set_symmetric(0, 2, 8);
        dm.set_symmetric(1, 2, 3);
        dm
    }

    #[test]
    fn test_new_is_zeroed() {
        let dm = DistanceMatrix::new(2);
        assert_eq!(dm.size(), 2);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(dm.get(i, j), 0);
            }
        }
    }

    #[test]
    fn test_set_symmetric() {
        let dm = sample();
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
        assert_eq!(dm.get(2, 1), 3);
    }

    #[test]
    fn test_set_is_one_way() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10);
        assert_eq!(dm.get(0, 1), 10);
        assert_eq!(dm.get(1, 0), 0);
    }

    #[test]
    fn test_distance_ignores_stored_diagonal() {
        let mut dm = sample();
        dm.set(1, 1, 99);
        assert_eq!(dm.get(1, 1), 99);
        assert_eq!(dm.distance(1, 1), 0);
    }
}
