//! ListGoalsHandler - read-side queries for goals with derived scores.
//!
//! Scores are a projection computed on read, relative to the caller's
//! `today`. They are never written back: the same stored goal can show
//! a green indicator one week and red the next without any persistence
//! change.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, GoalId};
use crate::domain::goal::Goal;
use crate::domain::scoring::GoalScores;
use crate::ports::GoalRepository;

/// A goal paired with its derived scores as of a given day.
#[derive(Debug, Clone)]
pub struct GoalView {
    pub goal: Goal,
    pub scores: GoalScores,
}

/// Error type for goal queries.
#[derive(Debug, Clone)]
pub enum ListGoalsError {
    /// Goal doesn't exist.
    GoalNotFound(GoalId),
    /// Domain error (persistence).
    Domain(DomainError),
}

impl std::fmt::Display for ListGoalsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListGoalsError::GoalNotFound(id) => write!(f, "Goal not found: {}", id),
            ListGoalsError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ListGoalsError {}

impl From<DomainError> for ListGoalsError {
    fn from(err: DomainError) -> Self {
        ListGoalsError::Domain(err)
    }
}

/// Handler for listing and fetching goals with their scores.
pub struct ListGoalsHandler {
    goal_repository: Arc<dyn GoalRepository>,
}

impl ListGoalsHandler {
    pub fn new(goal_repository: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repository }
    }

    /// Return all goals with scores computed as of `today`, sorted by
    /// descending cumulative score.
    pub async fn handle(&self, today: NaiveDate) -> Result<Vec<GoalView>, ListGoalsError> {
        let goals = self.goal_repository.find_all().await?;

        let mut views: Vec<GoalView> = goals
            .into_iter()
            .map(|goal| {
                let scores = GoalScores::for_goal(&goal, today);
                GoalView { goal, scores }
            })
            .collect();

        views.sort_by(|a, b| {
            b.scores
                .cumulative_score
                .partial_cmp(&a.scores.cumulative_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(views)
    }

    /// Fetch one goal with its scores as of `today`.
    pub async fn goal_by_id(
        &self,
        goal_id: &GoalId,
        today: NaiveDate,
    ) -> Result<GoalView, ListGoalsError> {
        let goal = self
            .goal_repository
            .find_by_id(goal_id)
            .await?
            .ok_or(ListGoalsError::GoalNotFound(*goal_id))?;

        let scores = GoalScores::for_goal(&goal, today);
        Ok(GoalView { goal, scores })
    }
}
