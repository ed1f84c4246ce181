//! A* search over the agent's known map.
//!
//! The graph is the set of known, non-obstacle cells with 4-connected
//! edges. Cells the agent has never bordered are not traversable.
//!
//! ## Ordering
//!
//! The open set pops the lowest f first. Equal f goes to the lower g, then
//! to the entry pushed first.
//!
//! ## Optimality
//!
//! Path cost counts moves only, while the heuristic adds up to two turns.
//! The returned path is shortest when `2 * turn_weight <= movement_weight`:
//! the heuristic then overestimates by at most one move, and any longer
//! path between the same cells is at least two moves longer.
//! [`AgentConfig::validate`](crate::AgentConfig::validate) enforces this
//! bound for loaded configs. Heavier turn weights still find a path but
//! may not find the shortest one.

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathResult};
