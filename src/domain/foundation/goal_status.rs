//! Goal lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a goal.
///
/// Progress-driven transitions into InProgress are advisory; Completed
/// is the only terminal state and entering it is irreversible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    /// Returns the kebab-case label.
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not-started",
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
        }
    }

    /// Returns true if the goal has been completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, GoalStatus::Completed)
    }
}

impl StateMachine for GoalStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GoalStatus::*;
        matches!(
            (self, target),
            (NotStarted, InProgress) | (NotStarted, Completed) | (InProgress, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GoalStatus::*;
        match self {
            NotStarted => vec![InProgress, Completed],
            InProgress => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
