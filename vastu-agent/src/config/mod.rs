//! Configuration loading for VastuAgent.
//!
//! All settings live in a single TOML file; every field has a default, so
//! a missing file, section or key falls back to built-in values.
//!
//! ```rust,ignore
//! use vastu_agent::config::AgentConfig;
//!
//! // Load from default path (configs/agent.toml), or defaults if absent
//! let config = AgentConfig::load_default()?;
//! let agent = VacAgent::with_config(config);
//! ```
//!
//! ## Example TOML
//!
//! ```toml
//! [agent]
//! id = "VAC-E"
//!
//! [cost]
//! movement_weight = 2   # per cell
//! turn_weight = 1       # per quarter turn
//!
//! [planner]
//! max_expansions = 100000
//! ```

mod agent;
mod defaults;
mod sections;

pub use agent::{AgentConfig, MAX_WEIGHT};
pub use sections::{AgentSection, CostSection, PlannerSection};
