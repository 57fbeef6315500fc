//! Neighbor enumeration for grid cells.

#![warn(missing_docs)]

use kestrel_grid::GridPoint;

use crate::error::PlanError;

/// Clockwise from North: N, NE, E, SE, S, SW, W, NW as `(d_row, d_col)`.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// N, E, S, W as `(d_row, d_col)`.
const OFFSETS_4: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Grid connectivity: how many adjacent cells a move may reach.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Orthogonal moves only (N, E, S, W).
    Four,
    /// Orthogonal and diagonal moves.
    #[default]
    Eight,
}

impl Connectivity {
    /// Creates a `Connectivity` from its neighbor degree.
    ///
    /// # Returns
    /// * `Result<Self, PlanError>` - `UnsupportedConnectivity` for any value
    ///   other than 4 or 8
    pub fn from_degree(degree: u8) -> Result<Self, PlanError> {
        match degree {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(PlanError::UnsupportedConnectivity(other)),
        }
    }

    /// The neighbor degree (4 or 8).
    pub const fn degree(self) -> u8 {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}

/// Enumerates the in-bounds neighbors of `point` on a `(rows, cols)` grid.
///
/// Neighbors are returned in a fixed order (clockwise starting at North),
/// which downstream tie-breaking relies on for determinism. Candidates
/// outside the grid are silently omitted; this is a filtering step, not a
/// validation step.
pub fn neighbors(
    point: &GridPoint,
    shape: (usize, usize),
    connectivity: Connectivity,
) -> Vec<GridPoint> {
    let offsets: &[(i64, i64)] = match connectivity {
        Connectivity::Four => &OFFSETS_4,
        Connectivity::Eight => &OFFSETS_8,
    };

    let (rows, cols) = shape;
    let mut result = Vec::with_capacity(offsets.len());

    for &(d_row, d_col) in offsets {
        let row = point.row as i64 + d_row;
        let col = point.col as i64 + d_col;
        if row < 0 || col < 0 || row >= rows as i64 || col >= cols as i64 {
            continue;
        }
        result.push(GridPoint::new(row as usize, col as usize));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degree() {
        assert_eq!(Connectivity::from_degree(4).unwrap(), Connectivity::Four);
        assert_eq!(Connectivity::from_degree(8).unwrap(), Connectivity::Eight);
        assert_eq!(
            Connectivity::from_degree(6),
            Err(PlanError::UnsupportedConnectivity(6))
        );
        assert_eq!(
            Connectivity::from_degree(0),
            Err(PlanError::UnsupportedConnectivity(0))
        );
    }

    #[test]
    fn test_interior_order_8() {
        let n = neighbors(&GridPoint::new(5, 5), (10, 10), Connectivity::Eight);
        let expected = [
            GridPoint::new(4, 5), // N
            GridPoint::new(4, 6), // NE
            GridPoint::new(5, 6), // E
            GridPoint::new(6, 6), // SE
            GridPoint::new(6, 5), // S
            GridPoint::new(6, 4), // SW
            GridPoint::new(5, 4), // W
            GridPoint::new(4, 4), // NW
        ];
        assert_eq!(n, expected);
    }

    #[test]
    fn test_interior_order_4() {
        let n = neighbors(&GridPoint::new(5, 5), (10, 10), Connectivity::Four);
        let expected = [
            GridPoint::new(4, 5), // N
            GridPoint::new(5, 6), // E
            GridPoint::new(6, 5), // S
            GridPoint::new(5, 4), // W
        ];
        assert_eq!(n, expected);
    }

    #[test]
    fn test_origin_corner() {
        let n8 = neighbors(&GridPoint::new(0, 0), (10, 10), Connectivity::Eight);
        assert_eq!(
            n8,
            [
                GridPoint::new(0, 1), // E
                GridPoint::new(1, 1), // SE
                GridPoint::new(1, 0), // S
            ]
        );

        let n4 = neighbors(&GridPoint::new(0, 0), (10, 10), Connectivity::Four);
        assert_eq!(n4, [GridPoint::new(0, 1), GridPoint::new(1, 0)]);
    }

    #[test]
    fn test_far_corner() {
        let n8 = neighbors(&GridPoint::new(9, 9), (10, 10), Connectivity::Eight);
        assert_eq!(n8.len(), 3);
        assert!(n8.contains(&GridPoint::new(8, 8)));
        assert!(n8.contains(&GridPoint::new(8, 9)));
        assert!(n8.contains(&GridPoint::new(9, 8)));

        let n4 = neighbors(&GridPoint::new(9, 9), (10, 10), Connectivity::Four);
        assert_eq!(n4.len(), 2);
    }

    #[test]
    fn test_edge_cell() {
        // A cell on the top edge keeps its five southern/lateral neighbors.
        let n = neighbors(&GridPoint::new(0, 5), (10, 10), Connectivity::Eight);
        assert_eq!(n.len(), 5);
        assert!(n.iter().all(|p| p.row <= 1));
    }
}
