//! Movement and turning cost model.
//!
//! Moving one cell costs `movement_weight`, each quarter turn costs
//! `turn_weight`. With the defaults (2 and 1) a move is worth two turns,
//! which steers the agent towards paths that avoid spinning in place.

use std::f64::consts::FRAC_PI_2;

use crate::core::{Direction, GridVector};

/// Cost weights for the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostModel {
    /// Cost per cell of Manhattan distance
    pub movement_weight: u32,
    /// Cost per quarter turn
    pub turn_weight: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            movement_weight: 2,
            turn_weight: 1,
        }
    }
}

impl CostModel {
    /// Create a cost model with explicit weights
    pub fn new(movement_weight: u32, turn_weight: u32) -> Self {
        Self {
            movement_weight,
            turn_weight,
        }
    }

    /// `|dx| + |dy|`
    #[inline]
    pub fn manhattan_distance(start: GridVector, end: GridVector) -> u32 {
        start.manhattan_distance(&end).unsigned_abs()
    }

    /// Quarter turns needed to face from `start` towards `end`.
    ///
    /// 0 when already facing that way (or when `start == end`), 1 when a
    /// single left or right turn brings the target within 90 degrees,
    /// 2 when it lies behind.
    pub fn turn_cost(start: GridVector, end: GridVector, facing: Direction) -> u32 {
        let angle = facing.unit_vector().angle(&(end - start));

        if angle.is_nan() || angle == 0.0 {
            0
        } else if angle <= FRAC_PI_2 {
            1
        } else {
            2
        }
    }

    /// Weighted Manhattan distance plus weighted turn cost.
    ///
    /// Ranks frontier cells, serves as the A* heuristic, and is the exact
    /// cost of a single step between adjacent cells.
    #[inline]
    pub fn estimate_cost(&self, start: GridVector, end: GridVector, facing: Direction) -> u32 {
        self.movement_weight
            .saturating_mul(Self::manhattan_distance(start, end))
            .saturating_add(self.turn_weight.saturating_mul(Self::turn_cost(start, end, facing)))
    }

    /// Exact cost of moving between adjacent cells, facing along the step.
    #[inline]
    pub fn step_cost(&self, from: GridVector, to: GridVector, step: Direction) -> u32 {
        self.estimate_cost(from, to, step)
    }
}
