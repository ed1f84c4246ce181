//! Core types for the VastuAgent planner.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridVector`]: Integer cell position or displacement (agent-local frame)
//! - [`Direction`]: Cardinal facing with fixed cyclic order N, E, S, W
//!
//! ### Beliefs
//! - [`CellKnowledge`]: Explored / dirty / obstacle flags for one cell
//!
//! ### Agent I/O
//! - [`VacPercept`] and the [`Perception`] trait: what the agent senses per tick
//! - [`Action`]: what the agent does per tick

mod action;
mod cell;
mod percept;
mod vector;

pub use action::Action;
pub use cell::CellKnowledge;
pub use percept::{Perception, VacPercept};
pub use vector::{Direction, GridVector};
