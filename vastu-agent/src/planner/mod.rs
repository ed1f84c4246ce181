//! Decision procedure for the vacuum agent.
//!
//! Once per tick the planner either continues its queued plan or builds a
//! new one:
//!
//! ```text
//!   shut down? ──yes──► None
//!       │
//!   surprising percept? ──yes──► drop queue
//!       │
//!   queue empty? ──yes──► build_plan
//!       │                   ├─ current cell dirty ──► [Clean]
//!       │                   ├─ frontier + A* path ──► turns / moves
//!       │                   └─ nothing left ────────► [PowerOff]
//!       ▼
//!   pop head, apply to WorldModel, return it
//! ```
//!
//! The returned action is applied to the world model before it is handed
//! back, so the believed pose already reflects what the environment is
//! about to do.

mod compile;
mod state;

pub use compile::compile_path;
pub use state::PlannerState;

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::core::Action;
use crate::pathfinding::{AStarConfig, AStarPlanner, CostModel};
use crate::query::FrontierSelector;
use crate::world::WorldModel;

/// Plan queue plus the search settings used to refill it.
pub struct Planner {
    plan: VecDeque<Action>,
    cost: CostModel,
    search: AStarConfig,
    frontiers: FrontierSelector,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(CostModel::default(), AStarConfig::default())
    }
}

impl Planner {
    /// Create a planner with explicit cost weights and search limits
    pub fn new(cost: CostModel, search: AStarConfig) -> Self {
        Self {
            plan: VecDeque::new(),
            cost,
            search,
            frontiers: FrontierSelector::new(cost),
        }
    }

    /// Cost model in use
    pub fn cost_model(&self) -> CostModel {
        self.cost
    }

    /// Actions still queued, head first
    pub fn pending(&self) -> impl Iterator<Item = Action> + '_ {
        self.plan.iter().copied()
    }

    /// Number of queued actions
    pub fn len(&self) -> usize {
        self.plan.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Current state given the world model's latest percept
    pub fn state(&self, world: &WorldModel) -> PlannerState {
        if world.is_shut_down() {
            PlannerState::Off
        } else if self.plan.is_empty() || world.needs_replan() {
            PlannerState::Replanning
        } else {
            PlannerState::Executing
        }
    }

    /// Choose the next action and apply it to `world`.
    ///
    /// Returns `None` once the agent has powered off.
    pub fn next_action(&mut self, world: &mut WorldModel) -> Option<Action> {
        if world.is_shut_down() {
            return None;
        }

        if world.needs_replan() && !self.plan.is_empty() {
            debug!(
                "[Planner] Dropping {} queued actions (obstacle={}, dirt={}, bump={})",
                self.plan.len(),
                world.obstacle_seen(),
                world.dirt_seen(),
                world.felt_bump()
            );
            self.plan.clear();
        }

        if self.plan.is_empty() {
            self.plan = self.build_plan(world).into();
        }

        let action = self.plan.pop_front()?;
        world.apply_action(action);

        if action.is_terminal() {
            let stats = world.stats();
            info!(
                "[Planner] Powering off at {}: {} cells known, {} explored, {} obstacles",
                world.position(),
                stats.known,
                stats.explored,
                stats.obstacles
            );
        }

        Some(action)
    }

    /// Build a fresh plan from the current beliefs. Never empty.
    pub fn build_plan(&self, world: &WorldModel) -> Vec<Action> {
        if world.is_dirty(world.position()) {
            debug!("[Planner] Cleaning {}", world.position());
            return vec![Action::Clean];
        }

        let movement = self.build_movement_plan(world);
        if movement.is_empty() {
            vec![Action::PowerOff]
        } else {
            movement
        }
    }

    /// Turns and moves that reach the cheapest frontier.
    ///
    /// Empty when there is no frontier, no known path to it, or the path
    /// could not be compiled.
    pub fn build_movement_plan(&self, world: &WorldModel) -> Vec<Action> {
        let Some(target) = self.frontiers.select(world) else {
            return Vec::new();
        };

        let result = AStarPlanner::new(world, self.cost, self.search.clone()).find_path(
            world.position(),
            world.facing(),
            target.cell,
        );

        if !result.success {
            warn!(
                "[Planner] Frontier {} unreachable: {:?}",
                target.cell, result.failure_reason
            );
            return Vec::new();
        }

        match compile_path(&result.path, world.facing()) {
            Ok(actions) => {
                debug!(
                    "[Planner] Heading to {} (estimate {}, path cost {}, {} actions, {} turns)",
                    target.cell,
                    target.cost,
                    result.cost,
                    actions.len(),
                    actions.iter().filter(|a| a.is_turn()).count()
                );
                actions
            }
            Err(e) => {
                warn!("[Planner] Discarding path to {}: {}", target.cell, e);
                Vec::new()
            }
        }
    }
}
