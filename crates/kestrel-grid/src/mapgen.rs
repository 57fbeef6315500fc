//! Random obstacle map generation.
//!
//! Produces occupancy grids seeded with randomly placed obstacles, for
//! planner demos and tests. Every tunable is an explicit call parameter;
//! there is no process-wide configuration.

#![warn(missing_docs)]

use rand::Rng;

use crate::gridmap::OccupancyGrid;
use crate::point::GridPoint;

/// Occupancy value painted into obstacle cells.
const OBSTACLE_VALUE: f64 = 1.0;

/// The shape of generated obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleStyle {
    /// Roughly circular blobs of randomised radius.
    Blob,
}

/// Generates a grid seeded with random obstacles.
///
/// Obstacle radii vary uniformly within `0.75..1.25` of `radius`, so
/// neighbouring obstacles may flow into each other. Obstacles whose extent
/// leaves the grid are clipped at the edges.
///
/// # Arguments
/// * `rows` - Number of rows in the generated grid
/// * `cols` - Number of columns in the generated grid
/// * `style` - The obstacle shape to seed
/// * `count` - How many obstacles to seed
/// * `radius` - The nominal obstacle radius, in cells
/// * `rng` - Source of randomness; pass a seeded rng for reproducible maps
///
/// # Returns
/// * `OccupancyGrid` - A grid with obstacle cells at [`OBSTACLE_VALUE`] and
///   all other cells clear
pub fn random_obstacle_map(
    rows: usize,
    cols: usize,
    style: ObstacleStyle,
    count: usize,
    radius: usize,
    rng: &mut impl Rng,
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::zeros(rows, cols);

    match style {
        ObstacleStyle::Blob => {
            for _ in 0..count {
                let center = GridPoint::new(rng.random_range(0..rows), rng.random_range(0..cols));
                let r = (rng.random_range(0.75..1.25) * radius as f64).round() as usize;
                paint_disc(&mut grid, &center, r);
            }
        }
    }

    grid
}

/// Paints a filled disc of obstacle cells centred on `center`.
///
/// Walks the disc's bounding box and marks every cell strictly inside the
/// radius, which is O(r^2) but plenty for map generation.
fn paint_disc(grid: &mut OccupancyGrid, center: &GridPoint, radius: usize) {
    let (rows, cols) = grid.dimensions();
    let r = radius as i64;
    let (c_row, c_col) = (center.row as i64, center.col as i64);

    for row in (c_row - r).max(0)..=(c_row + r).min(rows as i64 - 1) {
        for col in (c_col - r).max(0)..=(c_col + r).min(cols as i64 - 1) {
            let d_row = row - c_row;
            let d_col = col - c_col;
            if d_row * d_row + d_col * d_col < r * r {
                let point = GridPoint::new(row as usize, col as usize);
                // In bounds by construction of the loop ranges.
                let _ = grid.set_value(&point, OBSTACLE_VALUE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_blob_map_has_obstacles() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_obstacle_map(40, 40, ObstacleStyle::Blob, 6, 4, &mut rng);

        let occupied = grid.data().iter().filter(|&&v| v > 0.0).count();
        assert!(occupied > 0, "expected at least one obstacle cell");
        assert!(
            occupied < 40 * 40,
            "expected some clear space to remain"
        );
    }

    #[test]
    fn test_values_are_binary() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = random_obstacle_map(30, 20, ObstacleStyle::Blob, 5, 3, &mut rng);
        assert!(
            grid.data()
                .iter()
                .all(|&v| v == 0.0 || v == OBSTACLE_VALUE)
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = random_obstacle_map(25, 25, ObstacleStyle::Blob, 8, 3, &mut rng_a);
        let b = random_obstacle_map(25, 25, ObstacleStyle::Blob, 8, 3, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_edge_centers_are_clipped() {
        // Discs centred on the border must not panic or wrap.
        let mut grid = OccupancyGrid::zeros(10, 10);
        paint_disc(&mut grid, &GridPoint::new(0, 0), 3);
        paint_disc(&mut grid, &GridPoint::new(9, 9), 3);
        assert!(grid.value(&GridPoint::new(0, 0)).unwrap() > 0.0);
        assert!(grid.value(&GridPoint::new(9, 9)).unwrap() > 0.0);
    }
}
