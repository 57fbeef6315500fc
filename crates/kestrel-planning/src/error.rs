//! This module defines the error types used by the `kestrel-planning` crate.

#![warn(missing_docs)]

use kestrel_grid::{GridError, GridPoint};

/// Error type for planning operations.
///
/// The first four variants are caller-facing outcomes of [`plan`]
/// invocations; `NoPathFound` in particular is an expected, recoverable
/// result rather than a defect. The frontier variants (`DuplicateInsert`,
/// `NotFound`, `EmptyFrontier`) signal a violated internal contract of the
/// open set and indicate an engine bug, not bad caller input.
///
/// [`plan`]: crate::astar::AStarPlanner::plan
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Error for an unusable map.
    /// This variant is returned when the grid is below the 2x2 planning
    /// minimum; no search is attempted.
    InvalidMap(&'static str),
    /// Error for a start or goal point outside the grid.
    /// This variant carries the offending point and the grid dimensions;
    /// no search is attempted.
    OutOfBounds {
        /// The point that was out of bounds.
        point: GridPoint,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// Error for a connectivity degree other than 4 or 8.
    UnsupportedConnectivity(u8),
    /// The frontier was exhausted without reaching the goal: no path exists
    /// between start and goal under the supplied threshold.
    NoPathFound,
    /// Internal frontier contract violation: a node was inserted for a
    /// coordinate already present in the open set.
    DuplicateInsert(GridPoint),
    /// Internal frontier contract violation: a cost lookup or update named
    /// a coordinate absent from the open set.
    NotFound(GridPoint),
    /// Internal frontier contract violation: extraction from an empty
    /// frontier.
    EmptyFrontier,
}

impl core::fmt::Display for PlanError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlanError::InvalidMap(msg) => write!(f, "Invalid map: {}", msg),
            PlanError::OutOfBounds { point, rows, cols } => {
                write!(f, "Point {} is outside the {}x{} grid", point, rows, cols)
            }
            PlanError::UnsupportedConnectivity(degree) => {
                write!(f, "Unsupported connectivity {}: only 4 and 8 are supported", degree)
            }
            PlanError::NoPathFound => write!(f, "No path exists from start to goal"),
            PlanError::DuplicateInsert(point) => {
                write!(f, "Frontier already contains a node for {}", point)
            }
            PlanError::NotFound(point) => {
                write!(f, "Frontier holds no node for {}", point)
            }
            PlanError::EmptyFrontier => write!(f, "Cannot extract from an empty frontier"),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<GridError> for PlanError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidMap(msg) => PlanError::InvalidMap(msg),
            GridError::OutOfBounds { point, rows, cols } => {
                PlanError::OutOfBounds { point, rows, cols }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlanError::OutOfBounds {
            point: GridPoint::new(7, 3),
            rows: 5,
            cols: 5,
        };
        assert_eq!(format!("{}", err), "Point (7, 3) is outside the 5x5 grid");

        assert!(
            format!("{}", PlanError::UnsupportedConnectivity(6)).contains("6")
        );
    }

    #[test]
    fn test_from_grid_error() {
        let err: PlanError = GridError::InvalidMap("too small").into();
        assert_eq!(err, PlanError::InvalidMap("too small"));

        let err: PlanError = GridError::OutOfBounds {
            point: GridPoint::new(1, 2),
            rows: 3,
            cols: 4,
        }
        .into();
        assert!(matches!(err, PlanError::OutOfBounds { rows: 3, cols: 4, .. }));
    }
}
