//! A* shortest-path search over an occupancy grid.
//!
//! The engine pulls candidate expansions from [`neighbors`], keeps the open
//! set ordered through [`Frontier`], and accumulates exact Euclidean step
//! costs (`1` orthogonal, `sqrt(2)` diagonal) with a Euclidean
//! goal-distance heuristic. That heuristic never overestimates the true
//! remaining cost under this step geometry, so the returned path is optimal
//! for non-negative cell costs.

#![warn(missing_docs)]

use std::collections::{HashMap, HashSet};

use kestrel_grid::{GridPoint, OccupancyGrid};
use tracing::debug;

use crate::error::PlanError;
use crate::frontier::{Frontier, SearchNode};
use crate::neighbors::{Connectivity, neighbors};

/// The outcome of a successful plan, with search metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanReport {
    /// The path from start to goal, both inclusive.
    pub path: Vec<GridPoint>,
    /// Accumulated Euclidean cost of the path.
    pub total_cost: f64,
    /// How many nodes were expanded (popped from the frontier) during the
    /// search.
    pub nodes_expanded: usize,
}

impl std::fmt::Display for PlanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PlanReport {{ waypoints: {}, total_cost: {:.3}, nodes_expanded: {} }}",
            self.path.len(),
            self.total_cost,
            self.nodes_expanded
        )
    }
}

/// A grid A* planner.
///
/// The planner itself carries no map state; it owns only the `visited`
/// diagnostic trace recorded during the most recent [`AStarPlanner::plan`]
/// call. One read-only grid may therefore back any number of planner
/// instances.
#[derive(Debug, Default)]
pub struct AStarPlanner {
    /// Expansion order of the last search, for inspection and
    /// visualization. Has no effect on the search itself.
    visited: Vec<GridPoint>,
}

impl AStarPlanner {
    /// Creates a planner with an empty diagnostic trace.
    pub fn new() -> Self {
        AStarPlanner::default()
    }

    /// Plans a shortest path from `start` to `goal`.
    ///
    /// # Arguments
    /// * `grid` - The occupancy grid to plan over; read-only during search
    /// * `start` - Starting cell
    /// * `goal` - Goal cell
    /// * `threshold` - Cells whose value strictly exceeds this are obstacles
    /// * `connectivity` - 4- or 8-connected expansion
    ///
    /// # Returns
    /// * `Result<Vec<GridPoint>, PlanError>` - The path from start to goal
    ///   inclusive, or the failure classification: `InvalidMap` and
    ///   `OutOfBounds` before any search state is built, `NoPathFound` once
    ///   the frontier is exhausted
    pub fn plan(
        &mut self,
        grid: &OccupancyGrid,
        start: GridPoint,
        goal: GridPoint,
        threshold: f64,
        connectivity: Connectivity,
    ) -> Result<Vec<GridPoint>, PlanError> {
        self.plan_detailed(grid, start, goal, threshold, connectivity)
            .map(|report| report.path)
    }

    /// Plans a shortest path and reports search metadata alongside it.
    ///
    /// Same contract as [`AStarPlanner::plan`].
    pub fn plan_detailed(
        &mut self,
        grid: &OccupancyGrid,
        start: GridPoint,
        goal: GridPoint,
        threshold: f64,
        connectivity: Connectivity,
    ) -> Result<PlanReport, PlanError> {
        grid.validate()?;
        check_in_bounds(grid, &start)?;
        check_in_bounds(grid, &goal)?;

        self.visited.clear();
        debug!(%start, %goal, threshold, connectivity = connectivity.degree(), "planning path");

        let shape = grid.dimensions();
        let mut frontier = Frontier::new();
        frontier.insert(SearchNode::start(start, start.distance(&goal)))?;

        let mut closed: HashSet<GridPoint> = HashSet::new();
        // All finally-expanded nodes, keyed by coordinate; parent links are
        // resolved through this table during reconstruction.
        let mut expanded: HashMap<GridPoint, SearchNode> = HashMap::new();

        while !frontier.is_empty() {
            let current = frontier.extract_min(Some(goal))?;
            closed.insert(current.coordinate);
            self.visited.push(current.coordinate);

            if current.coordinate == goal {
                let path = reconstruct_path(&expanded, &current);
                debug!(
                    waypoints = path.len(),
                    total_cost = current.g,
                    nodes_expanded = self.visited.len(),
                    "path found"
                );
                return Ok(PlanReport {
                    path,
                    total_cost: current.g,
                    nodes_expanded: self.visited.len(),
                });
            }

            for neighbor in neighbors(&current.coordinate, shape, connectivity) {
                if closed.contains(&neighbor) {
                    continue;
                }
                // The neighbor generator only yields in-bounds cells, so
                // the obstacle check cannot fail on bounds.
                if grid.is_obstacle(&neighbor, threshold)? {
                    continue;
                }

                let tentative_g = current.g + current.coordinate.distance(&neighbor);

                if !frontier.contains(&neighbor) {
                    frontier.insert(SearchNode::new(
                        neighbor,
                        tentative_g,
                        neighbor.distance(&goal),
                        Some(current.coordinate),
                    ))?;
                } else {
                    // h is stationary per coordinate, so comparing f here
                    // is the same as comparing g.
                    let h = neighbor.distance(&goal);
                    if tentative_g + h < frontier.peek_cost(&neighbor)? {
                        frontier.update(&neighbor, tentative_g, h, Some(current.coordinate))?;
                    }
                }
            }

            expanded.insert(current.coordinate, current);
        }

        debug!(nodes_expanded = self.visited.len(), "frontier exhausted without reaching goal");
        Err(PlanError::NoPathFound)
    }

    /// The coordinates popped from the frontier during the last `plan`
    /// call, in expansion order.
    pub fn visited(&self) -> &[GridPoint] {
        &self.visited
    }
}

fn check_in_bounds(grid: &OccupancyGrid, point: &GridPoint) -> Result<(), PlanError> {
    if !grid.in_bounds(point) {
        let (rows, cols) = grid.dimensions();
        return Err(PlanError::OutOfBounds {
            point: *point,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Walks parent links from the goal node back to the parentless start and
/// returns the coordinates in start-to-goal order.
fn reconstruct_path(
    expanded: &HashMap<GridPoint, SearchNode>,
    goal_node: &SearchNode,
) -> Vec<GridPoint> {
    let mut path = vec![goal_node.coordinate];
    let mut parent = goal_node.parent;
    while let Some(coordinate) = parent {
        path.push(coordinate);
        parent = expanded.get(&coordinate).and_then(|node| node.parent);
    }
    path.reverse();
    path
}
