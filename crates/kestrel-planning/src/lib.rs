#![warn(missing_docs)]

//! Grid-based A* path planning for mobile robots.
//!
//! This crate plans shortest paths over the occupancy grids provided by
//! `kestrel-grid`. The pieces compose bottom-up:
//!
//! - [`neighbors`] enumerates 4- or 8-connected adjacent cells with bounds
//!   filtering;
//! - [`frontier`] maintains the open set with membership testing, in-place
//!   cost relaxation and deterministic tie-breaking among equal-cost
//!   candidates;
//! - [`astar`] runs the search itself and reconstructs the path through
//!   parent links.
//!
//! Planning is single-threaded and synchronous: [`AStarPlanner::plan`] runs
//! to completion within one call. The grid is never mutated during search,
//! so one map may back any number of independent planner instances.
//!
//! # Example
//!
//! ```
//! use kestrel_grid::{GridPoint, OccupancyGrid};
//! use kestrel_planning::{AStarPlanner, Connectivity};
//!
//! let grid = OccupancyGrid::zeros(5, 5);
//! let mut planner = AStarPlanner::new();
//! let path = planner
//!     .plan(
//!         &grid,
//!         GridPoint::new(0, 0),
//!         GridPoint::new(4, 4),
//!         0.0,
//!         Connectivity::Eight,
//!     )
//!     .unwrap();
//! assert_eq!(path.first(), Some(&GridPoint::new(0, 0)));
//! assert_eq!(path.last(), Some(&GridPoint::new(4, 4)));
//! ```

pub mod astar;
pub mod error;
pub mod frontier;
pub mod neighbors;

pub use astar::{AStarPlanner, PlanReport};
pub use error::PlanError;
pub use frontier::{Frontier, SearchNode};
pub use neighbors::{Connectivity, neighbors};
