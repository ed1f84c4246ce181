//! Per-cell belief record for the agent's map.
//!
//! A cell enters the map the first time the agent borders it. Knowing a
//! cell is not the same as having explored it: only cells the agent has
//! stood on and sensed from are `explored`.

use serde::{Deserialize, Serialize};

/// What the agent believes about one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellKnowledge {
    /// Known to be blocked. Never cleared once set.
    pub obstacle: bool,

    /// Dirt was seen here and not cleaned yet
    pub dirty: bool,

    /// The agent has occupied this cell and ingested a percept there
    pub explored: bool,
}

impl CellKnowledge {
    /// First sighting of a cell
    #[inline]
    pub fn sighted(obstacle: bool) -> Self {
        Self {
            obstacle,
            dirty: false,
            explored: false,
        }
    }

    /// Record an obstacle observation, never downgrading.
    ///
    /// Returns true if the cell was not already an obstacle.
    #[inline]
    pub fn mark_obstacle(&mut self) -> bool {
        let changed = !self.obstacle;
        self.obstacle = true;
        changed
    }

    /// Unexplored and not blocked: a candidate for exploration
    #[inline]
    pub fn is_frontier(&self) -> bool {
        !self.explored && !self.obstacle
    }

    /// Single character representation for debugging
    pub fn as_char(&self) -> char {
        match (self.obstacle, self.explored, self.dirty) {
            (true, _, _) => '#',
            (false, true, true) => '*',
            (false, true, false) => '.',
            (false, false, _) => '?',
        }
    }
}
