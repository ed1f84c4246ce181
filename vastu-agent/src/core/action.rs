//! Discrete actions the agent can emit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One action per tick. Once `PowerOff` has been emitted the agent
/// produces no further actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Suck up dirt in the current cell
    Clean,
    /// Move one cell in the facing direction
    MoveForward,
    /// Rotate 90 degrees counter-clockwise in place
    TurnLeft,
    /// Rotate 90 degrees clockwise in place
    TurnRight,
    /// Shut the agent down (terminal)
    PowerOff,
}

impl Action {
    /// Does this action end the episode?
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Action::PowerOff)
    }

    /// Is this an in-place rotation?
    #[inline]
    pub fn is_turn(self) -> bool {
        matches!(self, Action::TurnLeft | Action::TurnRight)
    }

    /// Action name for logging
    pub fn name(self) -> &'static str {
        match self {
            Action::Clean => "Clean",
            Action::MoveForward => "MoveForward",
            Action::TurnLeft => "TurnLeft",
            Action::TurnRight => "TurnRight",
            Action::PowerOff => "PowerOff",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_turn() {
        assert!(Action::TurnLeft.is_turn());
        assert!(Action::TurnRight.is_turn());
        assert!(!Action::MoveForward.is_turn());
        assert!(!Action::Clean.is_turn());
        assert!(!Action::PowerOff.is_turn());
    }

    #[test]
    fn test_only_power_off_is_terminal() {
        assert!(Action::PowerOff.is_terminal());
        assert!(!Action::Clean.is_terminal());
        assert!(!Action::TurnLeft.is_terminal());
    }
}
