#![warn(missing_docs)]

//! 2D occupancy grid model for mobile robot path planning.
//!
//! This crate provides the map-side building blocks that grid planners
//! operate on: an integer cell coordinate ([`GridPoint`]), a rectangular
//! occupancy grid of floating-point cell values ([`OccupancyGrid`]), and a
//! random obstacle map generator ([`mapgen`]) for demos and tests.
//!
//! The grid is read-only from a planner's point of view: mutation happens
//! during map construction, search only queries bounds and cell values.

pub mod error;
pub mod gridmap;
pub mod mapgen;
pub mod point;

pub use error::GridError;
pub use gridmap::OccupancyGrid;
pub use point::GridPoint;
