//! # Vastu-Agent: Exploring Vacuum Agent for Grid Worlds
//!
//! An online exploration-and-cleaning planner for an agent that only senses
//! its own cell and the cell ahead of it. The agent builds a sparse map
//! from percepts, picks the cheapest unexplored cell to visit, finds a
//! turn-aware shortest path there and emits it as discrete actions.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_agent::{Action, Agent, VacAgent, VacPercept};
//!
//! let mut agent = VacAgent::new();
//!
//! // Dirt underfoot: clean before moving on
//! agent.see(&VacPercept::new(true, false, false));
//! assert_eq!(agent.select_action(), Some(Action::Clean));
//!
//! // Clean cell, nothing ahead: explore straight on
//! agent.see(&VacPercept::CLEAR);
//! assert_eq!(agent.select_action(), Some(Action::MoveForward));
//! ```
//!
//! ## Coordinate Frame
//!
//! Agent-local and screen-like: the agent starts at (0, 0) facing north,
//! north is -Y and east is +X. Turning right steps the direction index
//! N(0) → E(1) → S(2) → W(3).
//!
//! ## Architecture
//!
//! - [`core`]: Coordinates, directions, cell beliefs, percepts, actions
//! - [`world`]: Belief map and percept/action ingestion
//! - [`pathfinding`]: Cost model and A* over the known map
//! - [`query`]: Frontier selection
//! - [`planner`]: Decision procedure and plan queue
//! - [`agent`]: The [`Agent`] trait and [`VacAgent`]
//! - [`config`]: TOML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   environment ──percept──► Agent::see ──► WorldModel::ingest_percept
//!                                                   │
//!   environment ◄──action── Agent::select_action    │
//!                                 │                 ▼
//!                                 └──► Planner ─► FrontierSelector
//!                                        │    ─► AStarPlanner
//!                                        │    ─► compile_path
//!                                        ▼
//!                            WorldModel::apply_action
//! ```

pub mod agent;
pub mod config;
pub mod core;
pub mod error;
pub mod pathfinding;
pub mod planner;
pub mod query;
pub mod world;

// Re-export main types at crate root
pub use crate::agent::{Agent, VacAgent};
pub use crate::config::AgentConfig;
pub use crate::error::{AgentError, Result};

pub use crate::core::{Action, CellKnowledge, Direction, GridVector, Perception, VacPercept};
pub use crate::pathfinding::{AStarConfig, AStarPlanner, CostModel, PathFailure, PathResult};
pub use crate::planner::{Planner, PlannerState};
pub use crate::query::{Frontier, FrontierSelector};
pub use crate::world::{MapStats, WorldModel};
