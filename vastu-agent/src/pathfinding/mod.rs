//! Path planning over the known map.
//!
//! - [`CostModel`]: Manhattan distance plus turn cost
//! - [`AStarPlanner`]: cheapest known path to a target cell

pub mod astar;
mod cost;

pub use astar::{AStarConfig, AStarPlanner, PathFailure, PathResult};
pub use cost::CostModel;
