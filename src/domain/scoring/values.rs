//! Derived score values - the read-only projection over a goal.
//!
//! The base `Goal` stays immutable; derived values are computed in this
//! separate projection and combined with the goal only at the
//! presentation boundary. They are never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::goal::Goal;

use super::engine;

/// Three-tier deadline proximity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineIndicator {
    /// Deadline is today or past.
    Red,
    /// One to three days remaining.
    Orange,
    /// More than three days remaining.
    Green,
}

impl DeadlineIndicator {
    /// Returns the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineIndicator::Red => "red",
            DeadlineIndicator::Orange => "orange",
            DeadlineIndicator::Green => "green",
        }
    }
}

impl fmt::Display for DeadlineIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The full derived-value bundle for one goal.
///
/// Raw IEEE-754 doubles, no rounding applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalScores {
    /// Derived cost: (time * complexity) / motivation.
    pub effort: f64,
    /// Ranking metric: (impact * urgency) / effort.
    pub priority_score: f64,
    /// XP credited on completion.
    pub cumulative_score: f64,
    /// Deadline proximity relative to `today`.
    pub deadline_indicator: DeadlineIndicator,
}

impl GoalScores {
    /// Computes the derived-value bundle for a goal.
    ///
    /// Pure with respect to its inputs: the goal is not mutated, and
    /// calling twice with the same goal and `today` yields identical
    /// results.
    pub fn for_goal(goal: &Goal, today: NaiveDate) -> Self {
        let attrs = goal.attributes();
        let impact = attrs.impact.as_f64();
        let urgency = attrs.urgency.as_f64();
        let motivation = attrs.motivation.as_f64();
        let complexity = attrs.complexity.as_f64();
        let time_estimate = attrs.time_estimate.value();

        let effort = engine::effort(time_estimate, complexity, motivation);

        Self {
            effort,
            priority_score: engine::priority_score(impact, urgency, effort),
            cumulative_score: engine::cumulative_score(
                impact,
                urgency,
                motivation,
                time_estimate,
                complexity,
            ),
            deadline_indicator: engine::deadline_indicator(goal.end_date(), today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GoalId;
    use crate::domain::goal::GoalAttributes;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn worked_example_goal(end_date: NaiveDate) -> Goal {
        Goal::new(
            GoalId::new(),
            "Launch thumbnail business".to_string(),
            date(2024, 6, 1),
            end_date,
            GoalAttributes::try_new(8, 9, 15.0, 7, 6).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn for_goal_computes_worked_example() {
        let goal = worked_example_goal(date(2024, 6, 30));
        let scores = GoalScores::for_goal(&goal, date(2024, 6, 1));

        assert!((scores.effort - 90.0 / 7.0).abs() < 1e-9);
        assert!((scores.priority_score - 5.6).abs() < 1e-9);
        assert!((scores.cumulative_score - 39.2).abs() < 1e-9);
        assert_eq!(scores.deadline_indicator, DeadlineIndicator::Green);
    }

    #[test]
    fn for_goal_is_idempotent() {
        let goal = worked_example_goal(date(2024, 6, 30));
        let today = date(2024, 6, 28);

        let first = GoalScores::for_goal(&goal, today);
        let second = GoalScores::for_goal(&goal, today);
        assert_eq!(first, second);
    }

    #[test]
    fn for_goal_does_not_mutate_goal() {
        let goal = worked_example_goal(date(2024, 6, 30));
        let snapshot = goal.clone();
        let _ = GoalScores::for_goal(&goal, date(2024, 6, 1));
        assert_eq!(goal, snapshot);
    }

    #[test]
    fn deadline_tiers_follow_today_input() {
        let goal = worked_example_goal(date(2024, 6, 10));

        let red = GoalScores::for_goal(&goal, date(2024, 6, 10));
        assert_eq!(red.deadline_indicator, DeadlineIndicator::Red);

        let orange = GoalScores::for_goal(&goal, date(2024, 6, 7));
        assert_eq!(orange.deadline_indicator, DeadlineIndicator::Orange);

        let green = GoalScores::for_goal(&goal, date(2024, 6, 6));
        assert_eq!(green.deadline_indicator, DeadlineIndicator::Green);
    }

    #[test]
    fn deadline_indicator_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeadlineIndicator::Orange).unwrap(),
            "\"orange\""
        );
    }
}
