//! The vacuum agent.
//!
//! [`VacAgent`] ties one [`WorldModel`] to one [`Planner`]. An external
//! driver calls [`Agent::see`] with each tick's percept and then
//! [`Agent::select_action`] once, applying the returned action in the real
//! environment.

use log::{debug, warn};

use crate::config::AgentConfig;
use crate::core::{Action, Perception, VacPercept};
use crate::error::Result;
use crate::planner::{Planner, PlannerState};
use crate::world::WorldModel;

/// Agent interface driven by the environment, one percept and one action per tick
pub trait Agent {
    /// Absorb this tick's percept
    fn see(&mut self, percept: &dyn Perception);

    /// Decide the action for this tick; `None` once powered off
    fn select_action(&mut self) -> Option<Action>;

    /// Agent identifier
    fn id(&self) -> &str;
}

/// Exploring, cleaning vacuum agent
pub struct VacAgent {
    id: String,
    world: WorldModel,
    planner: Planner,
}

impl Default for VacAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl VacAgent {
    /// Create an agent with default settings
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    /// Create an agent from a loaded configuration.
    ///
    /// Configs built in code skip [`AgentConfig::validate`]; an invalid one
    /// is logged and used as given.
    pub fn with_config(config: AgentConfig) -> Self {
        if let Err(e) = config.validate() {
            warn!("[Agent] {}: {}", config.agent.id, e);
        }
        debug!(
            "[Agent] {} starting (movement_weight={}, turn_weight={}, max_expansions={})",
            config.agent.id,
            config.cost.movement_weight,
            config.cost.turn_weight,
            config.planner.max_expansions
        );
        Self {
            planner: Planner::new(config.cost_model(), config.astar_config()),
            world: WorldModel::new(),
            id: config.agent.id,
        }
    }

    /// Absorb a raw encoded percept.
    ///
    /// An invalid encoding is rejected without touching the world model.
    pub fn see_raw(&mut self, bits: u8) -> Result<()> {
        match VacPercept::from_bits(bits) {
            Ok(percept) => {
                self.see(&percept);
                Ok(())
            }
            Err(e) => {
                warn!("[Agent] {} rejected percept: {}", self.id, e);
                Err(e)
            }
        }
    }

    /// Current beliefs
    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    /// Planner state as of the latest percept
    pub fn planner_state(&self) -> PlannerState {
        self.planner.state(&self.world)
    }

    /// Actions queued after the next decision, head first
    pub fn pending_actions(&self) -> Vec<Action> {
        self.planner.pending().collect()
    }
}

impl Agent for VacAgent {
    fn see(&mut self, percept: &dyn Perception) {
        self.world.ingest_percept(percept);
    }

    fn select_action(&mut self) -> Option<Action> {
        self.planner.next_action(&mut self.world)
    }

    fn id(&self) -> &str {
        &self.id
    }
}
