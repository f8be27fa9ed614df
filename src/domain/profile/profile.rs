//! UserProfile aggregate - the per-installation progression record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ProfileId, ValidationError};
use crate::domain::leveling;

/// Per-installation user profile tracking XP-style progression.
///
/// # Invariants
///
/// - `level >= 1`
/// - `total_score` is monotonically non-decreasing
/// - `level`, `score_for_current_level`, and `score_to_next_level` are
///   always recomputed from `total_score` through the leveling engine,
///   never set independently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for this profile.
    id: ProfileId,

    /// Current level, derived from total_score.
    level: u32,

    /// Cumulative score across all completed goals.
    total_score: f64,

    /// Minimum score required to be at the current level.
    score_for_current_level: f64,

    /// Minimum score required to reach the next level.
    score_to_next_level: f64,

    /// Earned badges (placeholder, unused).
    badges: Vec<String>,
}

impl UserProfile {
    /// Creates a fresh level-1 profile with zero score.
    pub fn new(id: ProfileId) -> Self {
        let mut profile = Self {
            id,
            level: 1,
            total_score: 0.0,
            score_for_current_level: 0.0,
            score_to_next_level: 0.0,
            badges: Vec::new(),
        };
        profile.recalculate();
        profile
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        id: ProfileId,
        level: u32,
        total_score: f64,
        score_for_current_level: f64,
        score_to_next_level: f64,
        badges: Vec<String>,
    ) -> Self {
        Self {
            id,
            level,
            total_score,
            score_for_current_level,
            score_to_next_level,
            badges,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the profile ID.
    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    /// Returns the current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the cumulative total score.
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Returns the score floor of the current level.
    pub fn score_for_current_level(&self) -> f64 {
        self.score_for_current_level
    }

    /// Returns the score needed to reach the next level.
    pub fn score_to_next_level(&self) -> f64 {
        self.score_to_next_level
    }

    /// Returns the earned badges.
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Credits a completed goal's cumulative score to the profile.
    ///
    /// Adds the score to the total and recomputes level and thresholds
    /// through the leveling engine.
    ///
    /// # Errors
    ///
    /// - `NotPositive` if the score is not finite and non-negative
    pub fn credit_score(&mut self, score: f64) -> Result<(), ValidationError> {
        if !score.is_finite() || score < 0.0 {
            return Err(ValidationError::not_positive("score", score));
        }
        self.total_score += score;
        self.recalculate();
        Ok(())
    }

    /// Rebuilds the profile from an externally recomputed total.
    ///
    /// Used by the repair pass that heals profile/history drift by
    /// summing history entries. Not part of the normal completion path.
    ///
    /// # Errors
    ///
    /// - `NotPositive` if the total is not finite and non-negative
    pub fn rebuild_from_total(&mut self, total_score: f64) -> Result<(), DomainError> {
        if !total_score.is_finite() || total_score < 0.0 {
            return Err(ValidationError::not_positive("total_score", total_score).into());
        }
        self.total_score = total_score;
        self.recalculate();
        Ok(())
    }

    fn recalculate(&mut self) {
        self.level = leveling::level_for_score(self.total_score);
        self.score_for_current_level = leveling::score_for_current_level(self.level);
        self.score_to_next_level = leveling::score_to_next_level(self.level);
    }
}
