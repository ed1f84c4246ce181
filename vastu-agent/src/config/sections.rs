//! Configuration sections.

use serde::{Deserialize, Serialize};

use crate::pathfinding::{AStarConfig, CostModel};

use super::defaults;

/// Agent identity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSection {
    /// Identifier reported by `Agent::id`
    #[serde(default = "defaults::agent_id")]
    pub id: String,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            id: defaults::agent_id(),
        }
    }
}

/// Planner cost weights
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSection {
    /// Cost per cell moved
    #[serde(default = "defaults::movement_weight")]
    pub movement_weight: u32,

    /// Cost per quarter turn
    #[serde(default = "defaults::turn_weight")]
    pub turn_weight: u32,
}

impl Default for CostSection {
    fn default() -> Self {
        Self {
            movement_weight: defaults::movement_weight(),
            turn_weight: defaults::turn_weight(),
        }
    }
}

impl CostSection {
    /// Convert to CostModel
    pub fn to_cost_model(&self) -> CostModel {
        CostModel::new(self.movement_weight, self.turn_weight)
    }
}

/// Search limits
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSection {
    /// A* expansion budget per search
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            max_expansions: defaults::max_expansions(),
        }
    }
}

impl PlannerSection {
    /// Convert to AStarConfig
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            max_expansions: self.max_expansions,
        }
    }
}
