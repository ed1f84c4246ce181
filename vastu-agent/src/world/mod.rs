//! The agent's world model.
//!
//! ```text
//!   percept ──► ingest_percept ──┐
//!                                ▼
//!                    ┌───────────────────────┐
//!                    │      WorldModel       │
//!                    │ IndexMap<GridVector,  │
//!                    │   CellKnowledge>      │
//!                    │ position, facing      │
//!                    └───────────────────────┘
//!                                ▲
//!   planner ───► apply_action ───┘
//! ```
//!
//! - [`WorldModel`]: sparse, discovery-ordered belief map plus believed pose
//! - [`MapStats`]: tallies for logging
//!
//! Unseen cells are optimistic: they read as dirty and not blocked.

mod model;
mod update;

pub use model::{MapStats, WorldModel};
