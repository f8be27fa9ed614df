//! ScoreHistoryEntry - append-only record of a goal completion.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, GoalTag, ScoreEntryId, Timestamp};
use crate::domain::goal::Goal;

/// One completion event in the score history log.
///
/// Carries denormalized snapshots of the goal's name and tags so the
/// log stays meaningful after the goal itself is deleted. Created
/// exactly once per completion; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistoryEntry {
    id: ScoreEntryId,
    goal_id: GoalId,
    goal_name: String,
    score: f64,
    date: Timestamp,
    tags: BTreeSet<GoalTag>,
}

impl ScoreHistoryEntry {
    /// Creates an entry snapshotting the goal at completion time.
    pub fn for_completion(goal: &Goal, score: f64, date: Timestamp) -> Self {
        Self {
            id: ScoreEntryId::new(),
            goal_id: *goal.id(),
            goal_name: goal.name().to_string(),
            score,
            date,
            tags: goal.tags().clone(),
        }
    }

    /// Reconstitute an entry from persistence.
    pub fn reconstitute(
        id: ScoreEntryId,
        goal_id: GoalId,
        goal_name: String,
        score: f64,
        date: Timestamp,
        tags: BTreeSet<GoalTag>,
    ) -> Self {
        Self {
            id,
            goal_id,
            goal_name,
            score,
            date,
            tags,
        }
    }

    /// Returns the entry ID.
    pub fn id(&self) -> &ScoreEntryId {
        &self.id
    }

    /// Returns the completed goal's ID.
    pub fn goal_id(&self) -> &GoalId {
        &self.goal_id
    }

    /// Returns the goal name snapshot.
    pub fn goal_name(&self) -> &str {
        &self.goal_name
    }

    /// Returns the credited score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns when the completion happened.
    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    /// Returns the tag snapshot.
    pub fn tags(&self) -> &BTreeSet<GoalTag> {
        &self.tags
    }
}
