//! SaveGoalHandler - command handler for creating and editing goals.
//!
//! One command covers both paths, mirroring a form submit: no goal ID
//! means create, an existing ID means wholesale update. Attribute input
//! arrives raw and is validated into value objects here, before any
//! scoring function can see it.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::foundation::{
    DomainError, EnergyLevel, GoalId, GoalTag, Progress, Recurrence, SubTaskId, ValidationError,
};
use crate::domain::goal::{Goal, GoalAttributes, SubTask};
use crate::ports::GoalRepository;

/// Subtask field set as edited in a form.
#[derive(Debug, Clone)]
pub struct SubTaskInput {
    /// Existing subtask ID, or None for a new row.
    pub id: Option<SubTaskId>,
    pub text: String,
    pub completed: bool,
}

/// Command to create or update a goal.
#[derive(Debug, Clone)]
pub struct SaveGoalCommand {
    /// Existing goal to update, or None to create.
    pub goal_id: Option<GoalId>,
    pub name: String,
    pub tags: BTreeSet<GoalTag>,
    pub notes: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub urgency: u8,
    pub impact: u8,
    pub time_estimate: f64,
    pub motivation: u8,
    pub complexity: u8,
    pub progress: u8,
    pub energy_level: Option<EnergyLevel>,
    pub recurrence: Option<Recurrence>,
    pub subtasks: Vec<SubTaskInput>,
}

/// Error type for saving a goal.
#[derive(Debug, Clone)]
pub enum SaveGoalError {
    /// Update requested for a goal that doesn't exist.
    GoalNotFound(GoalId),
    /// Domain error (validation, completed goal, persistence).
    Domain(DomainError),
}

impl std::fmt::Display for SaveGoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveGoalError::GoalNotFound(id) => write!(f, "Goal not found: {}", id),
            SaveGoalError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SaveGoalError {}

impl From<DomainError> for SaveGoalError {
    fn from(err: DomainError) -> Self {
        SaveGoalError::Domain(err)
    }
}

impl From<ValidationError> for SaveGoalError {
    fn from(err: ValidationError) -> Self {
        SaveGoalError::Domain(err.into())
    }
}

/// Handler for creating and editing goals.
pub struct SaveGoalHandler {
    goal_repository: Arc<dyn GoalRepository>,
}

impl SaveGoalHandler {
    pub fn new(goal_repository: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repository }
    }

    pub async fn handle(&self, cmd: SaveGoalCommand) -> Result<Goal, SaveGoalError> {
        let attributes = GoalAttributes::try_new(
            cmd.urgency,
            cmd.impact,
            cmd.time_estimate,
            cmd.motivation,
            cmd.complexity,
        )?;
        let progress = Progress::try_new(cmd.progress)?;
        let subtasks = cmd
            .subtasks
            .into_iter()
            .map(to_subtask)
            .collect::<Result<Vec<_>, _>>()?;

        match cmd.goal_id {
            None => {
                let mut goal = Goal::new(
                    GoalId::new(),
                    cmd.name,
                    cmd.start_date,
                    cmd.end_date,
                    attributes,
                )?;
                goal.set_tags(cmd.tags)?;
                goal.set_notes(cmd.notes)?;
                goal.set_energy_level(cmd.energy_level)?;
                goal.set_recurrence(cmd.recurrence)?;
                goal.set_subtasks(subtasks)?;
                goal.set_progress(progress)?;

                self.goal_repository.save(&goal).await?;
                debug!(goal_id = %goal.id(), "goal created");
                Ok(goal)
            }
            Some(goal_id) => {
                let mut goal = self
                    .goal_repository
                    .find_by_id(&goal_id)
                    .await?
                    .ok_or(SaveGoalError::GoalNotFound(goal_id))?;

                goal.rename(cmd.name)?;
                goal.set_tags(cmd.tags)?;
                goal.set_notes(cmd.notes)?;
                goal.reschedule(cmd.start_date, cmd.end_date)?;
                goal.set_attributes(attributes)?;
                goal.set_energy_level(cmd.energy_level)?;
                goal.set_recurrence(cmd.recurrence)?;
                goal.set_subtasks(subtasks)?;
                goal.set_progress(progress)?;

                self.goal_repository.update(&goal).await?;
                debug!(goal_id = %goal_id, "goal updated");
                Ok(goal)
            }
        }
    }
}

fn to_subtask(input: SubTaskInput) -> Result<SubTask, ValidationError> {
    if input.text.trim().is_empty() {
        return Err(ValidationError::empty_field("subtask_text"));
    }
    Ok(SubTask::reconstitute(
        input.id.unwrap_or_default(),
        input.text,
        input.completed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, GoalStatus, Timestamp};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockGoalRepository {
        goals: Mutex<Vec<Goal>>,
        saved: Mutex<Vec<Goal>>,
        updated: Mutex<Vec<Goal>>,
    }

    impl MockGoalRepository {
        fn new() -> Self {
            Self {
                goals: Mutex::new(Vec::new()),
                saved: Mutex::new(Vec::new()),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn with_goal(goal: Goal) -> Self {
            let repo = Self::new();
            repo.goals.lock().unwrap().push(goal);
            repo
        }
    }

    #[async_trait]
    impl GoalRepository for MockGoalRepository {
        async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
            self.saved.lock().unwrap().push(goal.clone());
            self.goals.lock().unwrap().push(goal.clone());
            Ok(())
        }

        async fn update(&self, goal: &Goal) -> Result<(), DomainError> {
            self.updated.lock().unwrap().push(goal.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id() == id)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Goal>, DomainError> {
            Ok(self.goals.lock().unwrap().clone())
        }

        async fn exists(&self, id: &GoalId) -> Result<bool, DomainError> {
            Ok(self.goals.lock().unwrap().iter().any(|g| g.id() == id))
        }

        async fn delete(&self, _id: &GoalId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_command() -> SaveGoalCommand {
        SaveGoalCommand {
            goal_id: None,
            name: "Daily meditation habit".to_string(),
            tags: [GoalTag::Health, GoalTag::Personal].into_iter().collect(),
            notes: "Ten minutes every morning".to_string(),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 21),
            urgency: 6,
            impact: 7,
            time_estimate: 5.0,
            motivation: 8,
            complexity: 3,
            progress: 0,
            energy_level: Some(EnergyLevel::Low),
            recurrence: Some(Recurrence::Daily),
            subtasks: vec![
                SubTaskInput {
                    id: None,
                    text: "Download meditation app".to_string(),
                    completed: false,
                },
                SubTaskInput {
                    id: None,
                    text: "Set daily reminder".to_string(),
                    completed: false,
                },
            ],
        }
    }

    #[tokio::test]
    async fn create_saves_new_goal_with_all_fields() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo.clone());

        let goal = handler.handle(create_command()).await.unwrap();

        assert_eq!(goal.name(), "Daily meditation habit");
        assert_eq!(goal.status(), GoalStatus::NotStarted);
        assert_eq!(goal.subtasks().len(), 2);
        assert_eq!(goal.energy_level(), Some(EnergyLevel::Low));
        assert_eq!(goal.recurrence(), Some(Recurrence::Daily));
        assert_eq!(repo.saved.lock().unwrap().len(), 1);
        assert!(repo.updated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_progress_starts_goal() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo);

        let mut cmd = create_command();
        cmd.progress = 30;
        let goal = handler.handle(cmd).await.unwrap();

        assert_eq!(goal.status(), GoalStatus::InProgress);
        assert_eq!(goal.progress().value(), 30);
    }

    #[tokio::test]
    async fn create_rejects_invalid_attributes() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo.clone());

        let mut cmd = create_command();
        cmd.motivation = 0;
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(SaveGoalError::Domain(DomainError {
                code: ErrorCode::OutOfRange,
                ..
            }))
        ));
        assert!(repo.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_zero_time_estimate() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo);

        let mut cmd = create_command();
        cmd.time_estimate = 0.0;
        assert!(handler.handle(cmd).await.is_err());
    }

    #[tokio::test]
    async fn update_edits_existing_goal() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo.clone());

        let created = handler.handle(create_command()).await.unwrap();

        let mut cmd = create_command();
        cmd.goal_id = Some(*created.id());
        cmd.name = "Morning meditation".to_string();
        cmd.motivation = 9;
        let updated = handler.handle(cmd).await.unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Morning meditation");
        assert_eq!(updated.attributes().motivation.value(), 9);
        assert_eq!(repo.updated.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_existing_subtask_ids() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo);

        let created = handler.handle(create_command()).await.unwrap();
        let existing_id = *created.subtasks()[0].id();

        let mut cmd = create_command();
        cmd.goal_id = Some(*created.id());
        cmd.subtasks = vec![SubTaskInput {
            id: Some(existing_id),
            text: "Download meditation app".to_string(),
            completed: true,
        }];
        let updated = handler.handle(cmd).await.unwrap();

        assert_eq!(updated.subtasks().len(), 1);
        assert_eq!(updated.subtasks()[0].id(), &existing_id);
        assert!(updated.subtasks()[0].is_completed());
    }

    #[tokio::test]
    async fn update_fails_for_unknown_goal() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo);

        let mut cmd = create_command();
        cmd.goal_id = Some(GoalId::new());
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(SaveGoalError::GoalNotFound(_))));
    }

    #[tokio::test]
    async fn update_fails_for_completed_goal() {
        let mut goal = Goal::new(
            GoalId::new(),
            "Done already".to_string(),
            date(2024, 6, 1),
            date(2024, 6, 21),
            GoalAttributes::try_new(5, 5, 2.0, 5, 5).unwrap(),
        )
        .unwrap();
        goal.complete(Timestamp::now()).unwrap();
        let goal_id = *goal.id();

        let repo = Arc::new(MockGoalRepository::with_goal(goal));
        let handler = SaveGoalHandler::new(repo);

        let mut cmd = create_command();
        cmd.goal_id = Some(goal_id);
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(SaveGoalError::Domain(DomainError {
                code: ErrorCode::GoalAlreadyCompleted,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn rejects_empty_subtask_text() {
        let repo = Arc::new(MockGoalRepository::new());
        let handler = SaveGoalHandler::new(repo);

        let mut cmd = create_command();
        cmd.subtasks.push(SubTaskInput {
            id: None,
            text: "  ".to_string(),
            completed: false,
        });
        assert!(handler.handle(cmd).await.is_err());
    }
}
