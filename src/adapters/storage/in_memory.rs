//! In-memory storage adapter.
//!
//! Backs both ports with a single locked state block, so the profile
//! and its history always move together. Used by tests and as the
//! default store when no data directory is configured.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, ProfileId};
use crate::domain::goal::Goal;
use crate::domain::profile::{ScoreHistoryEntry, UserProfile};
use crate::ports::{GoalRepository, ProfileStore};

#[derive(Debug, Default)]
struct StoreState {
    goals: Vec<Goal>,
    profile: Option<UserProfile>,
    history: Vec<ScoreHistoryEntry>,
}

/// In-memory implementation of both storage ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreState> {
        // Lock poisoning only happens if a thread panicked while
        // holding the guard; recover the data rather than cascade.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GoalRepository for InMemoryStore {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        let mut state = self.lock();
        if state.goals.iter().any(|g| g.id() == goal.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Goal already exists: {}", goal.id()),
            ));
        }
        state.goals.push(goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &Goal) -> Result<(), DomainError> {
        let mut state = self.lock();
        match state.goals.iter_mut().find(|g| g.id() == goal.id()) {
            Some(slot) => {
                *slot = goal.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::GoalNotFound,
                format!("Goal not found: {}", goal.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        Ok(self.lock().goals.iter().find(|g| g.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Goal>, DomainError> {
        Ok(self.lock().goals.clone())
    }

    async fn exists(&self, id: &GoalId) -> Result<bool, DomainError> {
        Ok(self.lock().goals.iter().any(|g| g.id() == id))
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        let mut state = self.lock();
        let before = state.goals.len();
        state.goals.retain(|g| g.id() != id);
        if state.goals.len() == before {
            return Err(DomainError::new(
                ErrorCode::GoalNotFound,
                format!("Goal not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn load_profile(&self) -> Result<UserProfile, DomainError> {
        let mut state = self.lock();
        let profile = state
            .profile
            .get_or_insert_with(|| UserProfile::new(ProfileId::new()));
        Ok(profile.clone())
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.lock().profile = Some(profile.clone());
        Ok(())
    }

    async fn score_history(&self) -> Result<Vec<ScoreHistoryEntry>, DomainError> {
        Ok(self.lock().history.clone())
    }

    async fn record_completion(
        &self,
        profile: &UserProfile,
        entry: &ScoreHistoryEntry,
    ) -> Result<(), DomainError> {
        // One guard covers both mutations, so the pair is atomic.
        let mut state = self.lock();
        state.history.push(entry.clone());
        state.profile = Some(profile.clone());
        Ok(())
    }
}
