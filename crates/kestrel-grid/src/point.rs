//! Grid cell coordinates.

#![warn(missing_docs)]

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in grid coordinates (cell indices), in `(row, col)` order.
///
/// Equality and hashing are structural, so a `GridPoint` can be used as a
/// set or map key.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPoint {
    /// The row index in the grid.
    pub row: usize,
    /// The column index in the grid.
    pub col: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance to `other`, in cell units.
    ///
    /// Cheaper than [`GridPoint::distance`] when only relative ordering of
    /// distances matters.
    pub fn distance2(&self, other: &GridPoint) -> f64 {
        let d_row = self.row as f64 - other.row as f64;
        let d_col = self.col as f64 - other.col as f64;
        d_row * d_row + d_col * d_col
    }

    /// Euclidean distance to `other`, in cell units.
    pub fn distance(&self, other: &GridPoint) -> f64 {
        self.distance2(other).sqrt()
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
