//! Occupancy grid implementation for path planning.
//!
//! An [`OccupancyGrid`] is a rectangular, row-major array of non-negative
//! floating-point occupancy values. A cell counts as an obstacle whenever
//! its value strictly exceeds a caller-supplied threshold, so the same map
//! can be interpreted at different levels of conservatism. The grid is
//! mutated only while a map is being built; planners treat it as read-only.

#![warn(missing_docs)]

use crate::error::GridError;
use crate::point::GridPoint;

/// Minimum number of rows and columns for a plannable map.
pub const MIN_MAP_EXTENT: usize = 2;

/// A 2D occupancy grid of floating-point cell values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row-major cell values in `[0, +inf)`.
    data: Vec<f64>,
}

impl OccupancyGrid {
    /// Creates an all-clear grid of the given size (every cell `0.0`).
    pub fn zeros(rows: usize, cols: usize) -> Self {
        OccupancyGrid {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a grid from a row-major cell buffer.
    ///
    /// # Arguments
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `data` - Row-major cell values; must hold exactly `rows * cols` entries
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid, or `InvalidMap` if the buffer
    ///   length disagrees with the dimensions
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, GridError> {
        if data.len() != rows * cols {
            return Err(GridError::InvalidMap(
                "cell buffer length does not match rows * cols",
            ));
        }
        Ok(OccupancyGrid { rows, cols, data })
    }

    /// Gets the dimensions of the grid as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true iff `point` lies within `[0, rows) x [0, cols)`.
    pub fn in_bounds(&self, point: &GridPoint) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Checks that the map is large enough to plan over.
    ///
    /// # Returns
    /// * `Result<(), GridError>` - `InvalidMap` if either dimension is
    ///   below [`MIN_MAP_EXTENT`]
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows < MIN_MAP_EXTENT || self.cols < MIN_MAP_EXTENT {
            return Err(GridError::InvalidMap(
                "grid must have at least 2 rows and 2 columns",
            ));
        }
        Ok(())
    }

    /// Calculates the linear index for a grid point.
    fn index(&self, point: &GridPoint) -> usize {
        point.row * self.cols + point.col
    }

    fn bounds_check(&self, point: &GridPoint) -> Result<(), GridError> {
        if !self.in_bounds(point) {
            return Err(GridError::OutOfBounds {
                point: *point,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Gets the occupancy value at a grid point.
    ///
    /// # Returns
    /// * `Result<f64, GridError>` - The cell value, or `OutOfBounds`
    pub fn value(&self, point: &GridPoint) -> Result<f64, GridError> {
        self.bounds_check(point)?;
        Ok(self.data[self.index(point)])
    }

    /// Sets the occupancy value at a grid point.
    ///
    /// This is a map-construction operation; planners never call it.
    ///
    /// # Returns
    /// * `Result<(), GridError>` - Success, or `OutOfBounds`
    pub fn set_value(&mut self, point: &GridPoint, value: f64) -> Result<(), GridError> {
        self.bounds_check(point)?;
        let idx = self.index(point);
        self.data[idx] = value;
        Ok(())
    }

    /// Checks whether a grid point is an obstacle under `threshold`.
    ///
    /// A cell is an obstacle iff its occupancy value strictly exceeds the
    /// threshold.
    ///
    /// # Returns
    /// * `Result<bool, GridError>` - The obstacle verdict, or `OutOfBounds`
    pub fn is_obstacle(&self, point: &GridPoint, threshold: f64) -> Result<bool, GridError> {
        Ok(self.value(point)? > threshold)
    }

    /// Gets a reference to the underlying row-major cell data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl std::fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "OccupancyGrid ({}x{})", self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let value = self.data[row * self.cols + col];
                write!(f, "{:4.1} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = OccupancyGrid::zeros(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert!(grid.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_data() {
        let grid = OccupancyGrid::from_data(2, 3, vec![0.0, 1.0, 0.0, 0.5, 0.0, 0.0]).unwrap();
        assert_eq!(grid.value(&GridPoint::new(0, 1)).unwrap(), 1.0);
        assert_eq!(grid.value(&GridPoint::new(1, 0)).unwrap(), 0.5);

        assert!(matches!(
            OccupancyGrid::from_data(2, 3, vec![0.0; 5]),
            Err(GridError::InvalidMap(_))
        ));
    }

    #[test]
    fn test_value_operations() {
        let mut grid = OccupancyGrid::zeros(5, 5);
        let p = GridPoint::new(2, 3);

        grid.set_value(&p, 0.8).unwrap();
        assert_eq!(grid.value(&p).unwrap(), 0.8);

        // Out of bounds on either axis
        assert!(matches!(
            grid.value(&GridPoint::new(5, 0)),
            Err(GridError::OutOfBounds { rows: 5, cols: 5, .. })
        ));
        assert!(matches!(
            grid.set_value(&GridPoint::new(0, 5), 1.0),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_is_obstacle_strictly_exceeds() {
        let mut grid = OccupancyGrid::zeros(3, 3);
        let p = GridPoint::new(1, 1);
        grid.set_value(&p, 0.5).unwrap();

        assert!(grid.is_obstacle(&p, 0.0).unwrap());
        assert!(grid.is_obstacle(&p, 0.49).unwrap());
        // A value equal to the threshold is traversable
        assert!(!grid.is_obstacle(&p, 0.5).unwrap());
        assert!(!grid.is_obstacle(&GridPoint::new(0, 0), 0.0).unwrap());

        assert!(matches!(
            grid.is_obstacle(&GridPoint::new(3, 3), 0.0),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(OccupancyGrid::zeros(2, 2).validate().is_ok());
        assert!(matches!(
            OccupancyGrid::zeros(1, 10).validate(),
            Err(GridError::InvalidMap(_))
        ));
        assert!(matches!(
            OccupancyGrid::zeros(10, 1).validate(),
            Err(GridError::InvalidMap(_))
        ));
    }

    #[test]
    fn test_in_bounds() {
        let grid = OccupancyGrid::zeros(3, 4);
        assert!(grid.in_bounds(&GridPoint::new(0, 0)));
        assert!(grid.in_bounds(&GridPoint::new(2, 3)));
        assert!(!grid.in_bounds(&GridPoint::new(3, 0)));
        assert!(!grid.in_bounds(&GridPoint::new(0, 4)));
    }

    #[test]
    fn test_display() {
        let mut grid = OccupancyGrid::zeros(2, 2);
        grid.set_value(&GridPoint::new(1, 1), 1.0).unwrap();

        let rendered = format!("{}", grid);
        assert!(rendered.contains("OccupancyGrid (2x2)"));
        assert!(rendered.contains("1.0"));
    }
}
