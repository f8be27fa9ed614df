//! Goal aggregate entity.
//!
//! Goals are the unit of work the user tracks. A goal carries the five
//! scoring attributes, a schedule, a subtask checklist, and a lifecycle
//! status. Derived scores are NOT stored here; they live in the
//! read-only `GoalScores` projection computed on demand.
//!
//! # Invariants
//!
//! - `name` is 1-500 characters, non-empty
//! - All five scoring attributes passed validation at construction
//! - Completed goals cannot be modified; completion happens exactly once

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Attribute, DomainError, EnergyLevel, ErrorCode, GoalId, GoalStatus, GoalTag, HoursEstimate,
    Progress, Recurrence, StateMachine, SubTaskId, Timestamp, ValidationError,
};

use super::SubTask;

/// Maximum length for a goal name.
pub const MAX_NAME_LENGTH: usize = 500;

/// The five scoring attributes of a goal, validated as a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAttributes {
    pub urgency: Attribute,
    pub impact: Attribute,
    pub time_estimate: HoursEstimate,
    pub motivation: Attribute,
    pub complexity: Attribute,
}

impl GoalAttributes {
    /// Validates raw attribute input into a bundle.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if any 1-10 attribute is outside its scale
    /// - `NotPositive` if the time estimate is not finite and positive
    pub fn try_new(
        urgency: u8,
        impact: u8,
        time_estimate: f64,
        motivation: u8,
        complexity: u8,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            urgency: Attribute::try_new("urgency", urgency)?,
            impact: Attribute::try_new("impact", impact)?,
            time_estimate: HoursEstimate::try_new(time_estimate)?,
            motivation: Attribute::try_new("motivation", motivation)?,
            complexity: Attribute::try_new("complexity", complexity)?,
        })
    }
}

/// Goal aggregate - a tracked objective with scoring attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier for this goal.
    id: GoalId,

    /// Goal name.
    name: String,

    /// Category tags (set semantics, no duplicates).
    tags: BTreeSet<GoalTag>,

    /// Free-text notes.
    notes: String,

    /// Scheduled start date.
    start_date: NaiveDate,

    /// Deadline date.
    end_date: NaiveDate,

    /// The five scoring attributes.
    attributes: GoalAttributes,

    /// Current lifecycle status.
    status: GoalStatus,

    /// Completion progress (0-100).
    progress: Progress,

    /// Energy this goal demands, if the user tracks it.
    energy_level: Option<EnergyLevel>,

    /// Recurrence cadence, if the goal repeats.
    recurrence: Option<Recurrence>,

    /// Ordered subtask checklist.
    subtasks: Vec<SubTask>,

    /// When the goal was created.
    created_at: Timestamp,

    /// When the goal was completed, if it has been.
    completed_at: Option<Timestamp>,
}

impl Goal {
    /// Create a new goal with default lifecycle state.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty or too long
    pub fn new(
        id: GoalId,
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        attributes: GoalAttributes,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            tags: BTreeSet::new(),
            notes: String::new(),
            start_date,
            end_date,
            attributes,
            status: GoalStatus::NotStarted,
            progress: Progress::ZERO,
            energy_level: None,
            recurrence: None,
            subtasks: Vec::new(),
            created_at: Timestamp::now(),
            completed_at: None,
        })
    }

    /// Reconstitute a goal from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: GoalId,
        name: String,
        tags: BTreeSet<GoalTag>,
        notes: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        attributes: GoalAttributes,
        status: GoalStatus,
        progress: Progress,
        energy_level: Option<EnergyLevel>,
        recurrence: Option<Recurrence>,
        subtasks: Vec<SubTask>,
        created_at: Timestamp,
        completed_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            name,
            tags,
            notes,
            start_date,
            end_date,
            attributes,
            status,
            progress,
            energy_level,
            recurrence,
            subtasks,
            created_at,
            completed_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the goal ID.
    pub fn id(&self) -> &GoalId {
        &self.id
    }

    /// Returns the goal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category tags.
    pub fn tags(&self) -> &BTreeSet<GoalTag> {
        &self.tags
    }

    /// Returns the free-text notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the scheduled start date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the deadline date.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the scoring attributes.
    pub fn attributes(&self) -> &GoalAttributes {
        &self.attributes
    }

    /// Returns the current status.
    pub fn status(&self) -> GoalStatus {
        self.status
    }

    /// Returns the completion progress.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the energy level, if tracked.
    pub fn energy_level(&self) -> Option<EnergyLevel> {
        self.energy_level
    }

    /// Returns the recurrence cadence, if any.
    pub fn recurrence(&self) -> Option<Recurrence> {
        self.recurrence
    }

    /// Returns the subtask checklist.
    pub fn subtasks(&self) -> &[SubTask] {
        &self.subtasks
    }

    /// Returns when the goal was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the goal was completed, if it has been.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Returns true if the goal has been completed.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Rename the goal.
    ///
    /// # Errors
    ///
    /// - `GoalAlreadyCompleted` if the goal is completed
    /// - `ValidationFailed` if name is empty or too long
    pub fn rename(&mut self, new_name: String) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        Self::validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    /// Replace the notes text.
    pub fn set_notes(&mut self, notes: String) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.notes = notes;
        Ok(())
    }

    /// Replace the tag set.
    pub fn set_tags(&mut self, tags: BTreeSet<GoalTag>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.tags = tags;
        Ok(())
    }

    /// Update the schedule.
    pub fn reschedule(
        &mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    /// Replace the scoring attributes.
    pub fn set_attributes(&mut self, attributes: GoalAttributes) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.attributes = attributes;
        Ok(())
    }

    /// Set or clear the energy level.
    pub fn set_energy_level(&mut self, level: Option<EnergyLevel>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.energy_level = level;
        Ok(())
    }

    /// Set or clear the recurrence cadence.
    pub fn set_recurrence(&mut self, recurrence: Option<Recurrence>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.recurrence = recurrence;
        Ok(())
    }

    /// Update the progress value.
    ///
    /// Non-zero progress on a not-started goal advances it to InProgress.
    /// The transition is advisory; only completion is enforced terminal.
    pub fn set_progress(&mut self, progress: Progress) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.progress = progress;
        if progress.is_started() && self.status == GoalStatus::NotStarted {
            self.status = self.status.transition_to(GoalStatus::InProgress)?;
        }
        Ok(())
    }

    /// Explicitly move the goal to InProgress.
    ///
    /// # Errors
    ///
    /// - `GoalAlreadyCompleted` if the goal is completed
    /// - `InvalidFormat` if the goal is already InProgress
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.status = self.status.transition_to(GoalStatus::InProgress)?;
        Ok(())
    }

    /// Append a new subtask, returning its ID.
    pub fn add_subtask(&mut self, text: impl Into<String>) -> Result<SubTaskId, DomainError> {
        self.ensure_mutable()?;
        let task = SubTask::new(text)?;
        let id = *task.id();
        self.subtasks.push(task);
        Ok(id)
    }

    /// Toggle a subtask's completed flag, returning the new value.
    ///
    /// # Errors
    ///
    /// - `SubTaskNotFound` if no subtask has the given ID
    pub fn toggle_subtask(&mut self, id: &SubTaskId) -> Result<bool, DomainError> {
        self.ensure_mutable()?;
        let task = self
            .subtasks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SubTaskNotFound, format!("Subtask not found: {}", id))
            })?;
        Ok(task.toggle())
    }

    /// Remove a subtask from the checklist.
    ///
    /// # Errors
    ///
    /// - `SubTaskNotFound` if no subtask has the given ID
    pub fn remove_subtask(&mut self, id: &SubTaskId) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        let before = self.subtasks.len();
        self.subtasks.retain(|t| t.id() != id);
        if self.subtasks.len() == before {
            return Err(DomainError::new(
                ErrorCode::SubTaskNotFound,
                format!("Subtask not found: {}", id),
            ));
        }
        Ok(())
    }

    /// Replace the whole checklist (form-style wholesale edit).
    pub fn set_subtasks(&mut self, subtasks: Vec<SubTask>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.subtasks = subtasks;
        Ok(())
    }

    /// Freeze the goal as completed.
    ///
    /// Sets status to Completed, progress to 100, and records the
    /// completion time. Irreversible; callers run the completion
    /// protocol (history entry + profile credit) around this call.
    ///
    /// # Errors
    ///
    /// - `GoalAlreadyCompleted` if called a second time
    pub fn complete(&mut self, now: Timestamp) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.status = self.status.transition_to(GoalStatus::Completed)?;
        self.progress = Progress::COMPLETE;
        self.completed_at = Some(now);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internal
    // ─────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.is_completed() {
            return Err(DomainError::new(
                ErrorCode::GoalAlreadyCompleted,
                format!("Goal {} is completed and cannot be modified", self.id),
            ));
        }
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Goal name cannot be empty"));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Goal name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_attributes() -> GoalAttributes {
        GoalAttributes::try_new(8, 9, 15.0, 7, 6).unwrap()
    }

    fn test_goal() -> Goal {
        Goal::new(
            GoalId::new(),
            "Launch thumbnail business".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            test_attributes(),
        )
        .unwrap()
    }

    #[test]
    fn new_goal_starts_not_started_with_zero_progress() {
        let goal = test_goal();
        assert_eq!(goal.status(), GoalStatus::NotStarted);
        assert_eq!(goal.progress(), Progress::ZERO);
        assert!(goal.completed_at().is_none());
        assert!(goal.subtasks().is_empty());
    }

    #[test]
    fn new_goal_rejects_empty_name() {
        let result = Goal::new(
            GoalId::new(),
            "  ".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            test_attributes(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_goal_rejects_overlong_name() {
        let result = Goal::new(
            GoalId::new(),
            "x".repeat(MAX_NAME_LENGTH + 1),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            test_attributes(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn attributes_bundle_rejects_invalid_input() {
        assert!(GoalAttributes::try_new(0, 9, 15.0, 7, 6).is_err());
        assert!(GoalAttributes::try_new(8, 9, 0.0, 7, 6).is_err());
        assert!(GoalAttributes::try_new(8, 9, 15.0, 11, 6).is_err());
    }

    #[test]
    fn rename_updates_name() {
        let mut goal = test_goal();
        goal.rename("Launch design business".to_string()).unwrap();
        assert_eq!(goal.name(), "Launch design business");
    }

    #[test]
    fn set_tags_replaces_set() {
        let mut goal = test_goal();
        let tags: BTreeSet<GoalTag> = [GoalTag::Work, GoalTag::Creative, GoalTag::Finance]
            .into_iter()
            .collect();
        goal.set_tags(tags.clone()).unwrap();
        assert_eq!(goal.tags(), &tags);
    }

    #[test]
    fn set_progress_advances_not_started_goal() {
        let mut goal = test_goal();
        goal.set_progress(Progress::new(30)).unwrap();
        assert_eq!(goal.status(), GoalStatus::InProgress);
        assert_eq!(goal.progress().value(), 30);
    }

    #[test]
    fn set_progress_zero_keeps_not_started() {
        let mut goal = test_goal();
        goal.set_progress(Progress::ZERO).unwrap();
        assert_eq!(goal.status(), GoalStatus::NotStarted);
    }

    #[test]
    fn start_moves_to_in_progress() {
        let mut goal = test_goal();
        goal.start().unwrap();
        assert_eq!(goal.status(), GoalStatus::InProgress);
    }

    #[test]
    fn start_fails_when_already_in_progress() {
        let mut goal = test_goal();
        goal.start().unwrap();
        assert!(goal.start().is_err());
    }

    #[test]
    fn subtask_add_toggle_remove() {
        let mut goal = test_goal();
        let id = goal.add_subtask("Learn basic design skills").unwrap();
        assert_eq!(goal.subtasks().len(), 1);

        assert!(goal.toggle_subtask(&id).unwrap());
        assert!(goal.subtasks()[0].is_completed());

        goal.remove_subtask(&id).unwrap();
        assert!(goal.subtasks().is_empty());
    }

    #[test]
    fn toggle_unknown_subtask_fails() {
        let mut goal = test_goal();
        let result = goal.toggle_subtask(&SubTaskId::new());
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::SubTaskNotFound, .. })
        ));
    }

    #[test]
    fn complete_freezes_goal() {
        let mut goal = test_goal();
        let now = Timestamp::now();
        goal.complete(now).unwrap();

        assert_eq!(goal.status(), GoalStatus::Completed);
        assert_eq!(goal.progress(), Progress::COMPLETE);
        assert_eq!(goal.completed_at(), Some(&now));
    }

    #[test]
    fn complete_is_allowed_from_not_started() {
        let mut goal = test_goal();
        assert_eq!(goal.status(), GoalStatus::NotStarted);
        assert!(goal.complete(Timestamp::now()).is_ok());
    }

    #[test]
    fn complete_twice_fails() {
        let mut goal = test_goal();
        goal.complete(Timestamp::now()).unwrap();

        let result = goal.complete(Timestamp::now());
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::GoalAlreadyCompleted, .. })
        ));
    }

    #[test]
    fn completed_goal_rejects_mutations() {
        let mut goal = test_goal();
        goal.complete(Timestamp::now()).unwrap();

        assert!(goal.rename("New name".to_string()).is_err());
        assert!(goal.set_progress(Progress::new(50)).is_err());
        assert!(goal.set_attributes(test_attributes()).is_err());
        assert!(goal.add_subtask("late addition").is_err());
    }

    #[test]
    fn starting_a_completed_goal_reports_already_completed() {
        let mut goal = test_goal();
        goal.complete(Timestamp::now()).unwrap();

        // Same error code as every other mutation on a frozen goal.
        let result = goal.start();
        assert!(matches!(
            result,
            Err(DomainError { code: ErrorCode::GoalAlreadyCompleted, .. })
        ));
        assert_eq!(goal.status(), GoalStatus::Completed);
    }

    #[test]
    fn goal_serializes_roundtrip() {
        let mut goal = test_goal();
        goal.set_tags([GoalTag::Work, GoalTag::Creative].into_iter().collect())
            .unwrap();
        goal.add_subtask("Set up portfolio").unwrap();
        goal.set_energy_level(Some(EnergyLevel::High)).unwrap();

        let json = serde_json::to_string(&goal).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, goal);
    }

    #[test]
    fn goal_status_serializes_kebab_case_inside_goal() {
        let goal = test_goal();
        let json = serde_json::to_string(&goal).unwrap();
        assert!(json.contains("\"not-started\""));
    }
}
