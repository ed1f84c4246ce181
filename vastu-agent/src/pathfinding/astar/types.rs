//! A* pathfinding types.

use crate::core::GridVector;
use std::cmp::Ordering;

/// A node in the A* open set
#[derive(Clone, Debug)]
pub(super) struct AStarNode {
    pub coord: GridVector,
    pub g_cost: u32, // Cost from start
    pub f_cost: u32, // g_cost + heuristic
    pub seq: u64,    // Push order
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for AStarNode {
    /// Reverse ordering for min-heap behavior: lowest f first, then lowest
    /// g, then earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.g_cost.cmp(&self.g_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_expansions: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
        }
    }
}

/// Result of an A* search
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Cells from start to goal inclusive (empty if no path found)
    pub path: Vec<GridVector>,
    /// Total path cost (`u32::MAX` if no path found)
    pub cost: u32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: u32::MAX,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start cell is not in the known map
    StartUnknown,
    /// Goal cell is not in the known map
    GoalUnknown,
    /// Goal cell is a known obstacle
    GoalBlocked,
    /// No known path connects start and goal
    NoPath,
    /// Maximum expansions exceeded
    MaxExpansionsExceeded,
}
