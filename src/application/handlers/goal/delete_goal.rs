//! DeleteGoalHandler - removes a goal permanently.
//!
//! Deletion never touches the profile or score history: credit earned
//! from a completed goal stays earned, and the history entry keeps a
//! name snapshot precisely so it survives the goal it came from.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, GoalId};
use crate::ports::GoalRepository;

/// Command to delete a goal.
#[derive(Debug, Clone)]
pub struct DeleteGoalCommand {
    pub goal_id: GoalId,
}

/// Error type for deleting a goal.
#[derive(Debug, Clone)]
pub enum DeleteGoalError {
    /// Goal doesn't exist.
    GoalNotFound(GoalId),
    /// Domain error (persistence).
    Domain(DomainError),
}

impl std::fmt::Display for DeleteGoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteGoalError::GoalNotFound(id) => write!(f, "Goal not found: {}", id),
            DeleteGoalError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DeleteGoalError {}

impl From<DomainError> for DeleteGoalError {
    fn from(err: DomainError) -> Self {
        DeleteGoalError::Domain(err)
    }
}

/// Handler for deleting goals.
pub struct DeleteGoalHandler {
    goal_repository: Arc<dyn GoalRepository>,
}

impl DeleteGoalHandler {
    pub fn new(goal_repository: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repository }
    }

    pub async fn handle(&self, cmd: DeleteGoalCommand) -> Result<(), DeleteGoalError> {
        if !self.goal_repository.exists(&cmd.goal_id).await? {
            return Err(DeleteGoalError::GoalNotFound(cmd.goal_id));
        }

        self.goal_repository.delete(&cmd.goal_id).await?;
        debug!(goal_id = %cmd.goal_id, "goal deleted");
        Ok(())
    }
}
