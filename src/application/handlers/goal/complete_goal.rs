//! CompleteGoalHandler - command handler for the completion protocol.
//!
//! Completing a goal is the one place score is credited:
//!
//! 1. compute the cumulative score from the goal's attributes at the
//!    moment of completion
//! 2. freeze the goal (status Completed, progress 100, completed_at)
//! 3. append one score history entry
//! 4. credit the profile and recompute its level thresholds
//! 5. persist entry + profile atomically through the store
//!
//! The protocol is resumable: if the store write in step 5 fails after
//! the frozen goal was persisted, a retry finds the goal already
//! Completed and checks the history log. No entry for the goal means
//! the credit is still owed and the retry performs it; an existing
//! entry means the protocol already ran to the end, and the retry fails
//! with `GOAL_ALREADY_COMPLETED`. The history log is what guards
//! against double-appending, not the goal's terminal state alone.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, Timestamp};
use crate::domain::goal::Goal;
use crate::domain::profile::{ScoreHistoryEntry, UserProfile};
use crate::domain::scoring::GoalScores;
use crate::ports::{GoalRepository, ProfileStore};

/// Command to complete a goal.
#[derive(Debug, Clone)]
pub struct CompleteGoalCommand {
    /// The goal to complete.
    pub goal_id: GoalId,
}

/// Result of successfully completing a goal.
#[derive(Debug, Clone)]
pub struct CompleteGoalResult {
    /// The frozen goal.
    pub goal: Goal,
    /// The appended history entry.
    pub entry: ScoreHistoryEntry,
    /// The credited profile.
    pub profile: UserProfile,
}

/// Error type for completing a goal.
#[derive(Debug, Clone)]
pub enum CompleteGoalError {
    /// Goal not found.
    GoalNotFound(GoalId),
    /// Domain error (already completed, persistence failure, ...).
    Domain(DomainError),
}

impl std::fmt::Display for CompleteGoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompleteGoalError::GoalNotFound(id) => write!(f, "Goal not found: {}", id),
            CompleteGoalError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompleteGoalError {}

impl From<DomainError> for CompleteGoalError {
    fn from(err: DomainError) -> Self {
        CompleteGoalError::Domain(err)
    }
}

/// Handler for completing goals.
pub struct CompleteGoalHandler {
    goal_repository: Arc<dyn GoalRepository>,
    profile_store: Arc<dyn ProfileStore>,
}

impl CompleteGoalHandler {
    pub fn new(
        goal_repository: Arc<dyn GoalRepository>,
        profile_store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            goal_repository,
            profile_store,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteGoalCommand,
        now: Timestamp,
    ) -> Result<CompleteGoalResult, CompleteGoalError> {
        // 1. Find the goal
        let mut goal = self
            .goal_repository
            .find_by_id(&cmd.goal_id)
            .await?
            .ok_or(CompleteGoalError::GoalNotFound(cmd.goal_id))?;

        // An already-frozen goal is either a genuine re-completion or a
        // retry after the credit write failed; the history log decides.
        if goal.is_completed() {
            return self.resume_pending_credit(goal, now).await;
        }

        // 2. Score the goal's attributes before any state is overwritten
        let scores = GoalScores::for_goal(&goal, now.date());

        // 3. Freeze the goal
        goal.complete(now)?;
        self.goal_repository.update(&goal).await?;

        // 4-5. Credit the profile and persist
        self.credit(goal, scores.cumulative_score, now).await
    }

    /// Finish the protocol for a goal that is already frozen.
    ///
    /// Credits the profile only if the history log has no entry for the
    /// goal, so a retry after a transient store failure recovers the
    /// owed score while a true re-completion cannot double-credit.
    async fn resume_pending_credit(
        &self,
        goal: Goal,
        now: Timestamp,
    ) -> Result<CompleteGoalResult, CompleteGoalError> {
        let history = self.profile_store.score_history().await?;
        if history.iter().any(|entry| entry.goal_id() == goal.id()) {
            return Err(DomainError::new(
                ErrorCode::GoalAlreadyCompleted,
                format!("Goal already completed: {}", goal.id()),
            )
            .into());
        }

        // Attributes are untouched by the freeze, so the score comes
        // out the same as it would have on the first attempt.
        let scores = GoalScores::for_goal(&goal, now.date());
        let at = goal.completed_at().copied().unwrap_or(now);
        self.credit(goal, scores.cumulative_score, at).await
    }

    /// Steps 4-5 of the protocol: one history entry, one profile update,
    /// persisted as a single atomic store write.
    async fn credit(
        &self,
        goal: Goal,
        score: f64,
        at: Timestamp,
    ) -> Result<CompleteGoalResult, CompleteGoalError> {
        let entry = ScoreHistoryEntry::for_completion(&goal, score, at);
        let mut profile = self.profile_store.load_profile().await?;
        let level_before = profile.level();
        profile.credit_score(score).map_err(DomainError::from)?;

        self.profile_store
            .record_completion(&profile, &entry)
            .await?;

        info!(
            goal_id = %goal.id(),
            score,
            level_before,
            level_after = profile.level(),
            "goal completed"
        );

        Ok(CompleteGoalResult {
            goal,
            entry,
            profile,
        })
    }
}
