//! Map queries used by the planner.

pub mod frontier;

pub use frontier::{Frontier, FrontierSelector};
