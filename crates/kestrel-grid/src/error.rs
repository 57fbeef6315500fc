//! This module defines the error types used by the `kestrel-grid` crate.

#![warn(missing_docs)]

use crate::point::GridPoint;

/// Error type for occupancy grid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error for an unusable map.
    /// This variant is returned when the grid dimensions are below the
    /// planning minimum or the cell buffer disagrees with the dimensions.
    InvalidMap(&'static str),
    /// Error for out-of-bounds access.
    /// This variant is returned when a cell lookup lies outside
    /// `[0, rows) x [0, cols)`; it carries the offending point and the
    /// grid dimensions.
    OutOfBounds {
        /// The point that was looked up.
        point: GridPoint,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidMap(msg) => write!(f, "Invalid map: {}", msg),
            GridError::OutOfBounds { point, rows, cols } => {
                write!(f, "Point {} is outside the {}x{} grid", point, rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}
