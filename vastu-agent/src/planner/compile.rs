//! Path to action compilation.
//!
//! A path is a list of adjacent cells starting at the agent's position.
//! Each step becomes the turns needed to face it followed by one
//! `MoveForward`. The pose used while compiling is a local copy; the
//! world model is untouched.

use crate::core::{Action, Direction, GridVector};
use crate::error::Result;

/// Compile a cell path into actions, starting from `facing`.
///
/// The first element is the current cell and produces no action.
/// Fails with `InvalidDisplacement` if two consecutive cells are not
/// orthogonally adjacent.
pub fn compile_path(path: &[GridVector], facing: Direction) -> Result<Vec<Action>> {
    let mut actions = Vec::with_capacity(path.len() * 2);
    let mut heading = facing;

    for pair in path.windows(2) {
        let step = Direction::try_from(pair[1] - pair[0])?;

        match heading.right_turns_to(step) {
            0 => {}
            1 => actions.push(Action::TurnRight),
            2 => actions.extend([Action::TurnRight, Action::TurnRight]),
            _ => actions.push(Action::TurnLeft),
        }
        heading = step;

        actions.push(Action::MoveForward);
    }

    Ok(actions)
}
