//! Belief updates from percepts and from the agent's own actions.
//!
//! Percepts reveal the current cell and its four neighbors; only the cell
//! straight ahead can be reported as an obstacle. Actions are applied just
//! before they are executed so the believed pose tracks the real one.

use log::{debug, trace};

use crate::core::{Action, CellKnowledge, Direction, Perception};

use super::WorldModel;

impl WorldModel {
    /// Fold one percept into the map.
    pub fn ingest_percept<P: Perception + ?Sized>(&mut self, percept: &P) {
        let position = self.position;

        self.dirt_seen = percept.sees_dirt();
        self.felt_bump = percept.feels_bump();

        let current = self.cells.entry(position).or_default();
        current.explored = true;
        current.dirty = self.dirt_seen;

        for direction in Direction::ALL {
            let neighbor = position.step(direction);

            // Only the cell ahead can be sensed as blocked
            let mut obstacle = false;
            if direction == self.facing {
                self.obstacle_seen = percept.sees_obstacle();
                obstacle = self.obstacle_seen;
            }

            let cell = self
                .cells
                .entry(neighbor)
                .or_insert_with(|| CellKnowledge::sighted(obstacle));
            if obstacle && cell.mark_obstacle() {
                debug!("[WorldModel] obstacle at {}", neighbor);
            }
        }

        trace!(
            "[WorldModel] percept at {} facing {:?}: dirt={} obstacle={} bump={}",
            position,
            self.facing,
            self.dirt_seen,
            self.obstacle_seen,
            self.felt_bump
        );
    }

    /// Update beliefs for an action that is about to be executed.
    ///
    /// Only the planner calls this, so beliefs change through exactly one
    /// action entry point.
    pub(crate) fn apply_action(&mut self, action: Action) {
        match action {
            Action::Clean => {
                self.cells.entry(self.position).or_default().dirty = false;
            }
            Action::MoveForward => {
                if !self.felt_bump {
                    self.position = self.position.step(self.facing);
                }
            }
            Action::TurnLeft => self.facing = self.facing.turned_left(),
            Action::TurnRight => self.facing = self.facing.turned_right(),
            Action::PowerOff => self.shut_down = true,
        }
    }
}
