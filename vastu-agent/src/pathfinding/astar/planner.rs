//! A* planner implementation.

use crate::core::{Direction, GridVector};
use crate::pathfinding::CostModel;
use crate::world::WorldModel;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{AStarConfig, AStarNode, PathFailure, PathResult};

/// A* pathfinder over the known map
pub struct AStarPlanner<'a> {
    world: &'a WorldModel,
    cost: CostModel,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(world: &'a WorldModel, cost: CostModel, config: AStarConfig) -> Self {
        Self {
            world,
            cost,
            config,
        }
    }

    /// Create with default cost model and configuration
    pub fn with_defaults(world: &'a WorldModel) -> Self {
        Self::new(world, CostModel::default(), AStarConfig::default())
    }

    /// Find the cheapest known path from `start` (facing `facing`) to `goal`.
    ///
    /// Edges are `passable_neighbors`; each step costs
    /// [`CostModel::step_cost`]. A node's heuristic is the estimated cost to
    /// the goal given the direction of the step that reached it.
    pub fn find_path(&self, start: GridVector, facing: Direction, goal: GridVector) -> PathResult {
        trace!(
            "[AStar] find_path: start={} facing={:?} goal={}",
            start,
            facing,
            goal
        );

        if !self.world.is_seen(start) {
            debug!("[AStar] FAILED: StartUnknown at {}", start);
            return PathResult::failed(PathFailure::StartUnknown, 0);
        }
        if !self.world.is_seen(goal) {
            debug!("[AStar] FAILED: GoalUnknown at {}", goal);
            return PathResult::failed(PathFailure::GoalUnknown, 0);
        }
        if self.world.is_obstacle(goal) {
            debug!("[AStar] FAILED: GoalBlocked at {}", goal);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        // A* search
        let mut open_set = BinaryHeap::new();
        let mut closed_set: HashSet<GridVector> = HashSet::new();
        let mut came_from: HashMap<GridVector, GridVector> = HashMap::new();
        let mut g_scores: HashMap<GridVector, u32> = HashMap::new();
        let mut seq: u64 = 0;

        g_scores.insert(start, 0);
        open_set.push(AStarNode {
            coord: start,
            g_cost: 0,
            f_cost: self.cost.estimate_cost(start, goal, facing),
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Superseded by a cheaper route pushed later
            if g_scores
                .get(&current.coord)
                .is_some_and(|&best| current.g_cost > best)
            {
                continue;
            }
            if closed_set.contains(&current.coord) {
                continue;
            }

            // Goal reached
            if current.coord == goal {
                return self.reconstruct_path(&came_from, start, goal, current.g_cost, nodes_expanded);
            }

            nodes_expanded += 1;

            if nodes_expanded > self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: MaxExpansionsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxExpansionsExceeded, nodes_expanded);
            }

            closed_set.insert(current.coord);

            for neighbor in self.world.passable_neighbors(current.coord) {
                let Ok(step) = Direction::try_from(neighbor - current.coord) else {
                    continue;
                };

                let tentative_g = current
                    .g_cost
                    .saturating_add(self.cost.step_cost(current.coord, neighbor, step));

                let improves = g_scores
                    .get(&neighbor)
                    .map_or(true, |&known| tentative_g < known);
                if improves {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);
                    // A strictly better route reopens a finalized node
                    closed_set.remove(&neighbor);

                    seq += 1;
                    let h = self.cost.estimate_cost(neighbor, goal, step);
                    open_set.push(AStarNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g.saturating_add(h),
                        seq,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Walk the predecessor map back from the goal
    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridVector, GridVector>,
        start: GridVector,
        goal: GridVector,
        cost: u32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = vec![goal];
        let mut current = goal;

        while current != start {
            match came_from.get(&current) {
                Some(&prev) if path.len() <= came_from.len() => {
                    path.push(prev);
                    current = prev;
                }
                _ => {
                    debug!("[AStar] FAILED: broken predecessor chain at {}", current);
                    return PathResult::failed(PathFailure::NoPath, nodes_expanded);
                }
            }
        }
        path.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
