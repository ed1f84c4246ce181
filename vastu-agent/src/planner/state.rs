//! Planner states.

use std::fmt;

/// Where the planner stands between two decisions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerState {
    /// Agent has powered off; no further actions
    Off,

    /// No usable plan; the next decision builds one
    Replanning,

    /// Following a queued plan
    Executing,
}

impl PlannerState {
    /// Is this a terminal state?
    pub fn is_terminal(self) -> bool {
        matches!(self, PlannerState::Off)
    }

    /// State name for logging
    pub fn name(self) -> &'static str {
        match self {
            PlannerState::Off => "Off",
            PlannerState::Replanning => "Replanning",
            PlannerState::Executing => "Executing",
        }
    }
}

impl fmt::Display for PlannerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
