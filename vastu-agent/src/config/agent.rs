//! Main AgentConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};
use crate::pathfinding::{AStarConfig, CostModel};

use super::sections::{AgentSection, CostSection, PlannerSection};

/// Full agent configuration loaded from TOML
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent identity
    #[serde(default)]
    pub agent: AgentSection,

    /// Cost weights
    #[serde(default)]
    pub cost: CostSection,

    /// Search limits
    #[serde(default)]
    pub planner: PlannerSection,
}

/// Largest accepted cost weight
pub const MAX_WEIGHT: u32 = 1_000_000;

impl AgentConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from default config path (configs/agent.toml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/agent.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from TOML string. The result is validated.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// A turn may cost at most half a move, otherwise the turn term of the
    /// search heuristic can overestimate and plans lose optimality.
    pub fn validate(&self) -> Result<()> {
        let cost = &self.cost;
        if cost.movement_weight == 0 {
            return Err(AgentError::Config(
                "movement_weight must be > 0".to_string(),
            ));
        }
        if cost.movement_weight > MAX_WEIGHT || cost.turn_weight > MAX_WEIGHT {
            return Err(AgentError::Config(format!(
                "cost weights must be <= {}",
                MAX_WEIGHT
            )));
        }
        if cost.turn_weight.saturating_mul(2) > cost.movement_weight {
            return Err(AgentError::Config(format!(
                "turn_weight ({}) must be at most half of movement_weight ({})",
                cost.turn_weight, cost.movement_weight
            )));
        }
        if self.planner.max_expansions == 0 {
            return Err(AgentError::Config(
                "max_expansions must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Get the cost model
    pub fn cost_model(&self) -> CostModel {
        self.cost.to_cost_model()
    }

    /// Get the A* search config
    pub fn astar_config(&self) -> AStarConfig {
        self.planner.to_astar_config()
    }
}
