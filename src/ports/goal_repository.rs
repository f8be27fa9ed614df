//! Goal repository port.
//!
//! Defines the contract for persisting and retrieving Goal aggregates.
//! The scoring engine never touches this directly; application handlers
//! wire engine outputs into it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GoalId};
use crate::domain::goal::Goal;

/// Repository port for Goal aggregate persistence.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Save a new goal.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Update an existing goal.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` if the goal doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Find a goal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError>;

    /// Return all goals, ordered by creation time.
    async fn find_all(&self) -> Result<Vec<Goal>, DomainError>;

    /// Check if a goal exists.
    async fn exists(&self, id: &GoalId) -> Result<bool, DomainError>;

    /// Delete a goal.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` if the goal doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &GoalId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn goal_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GoalRepository) {}
    }
}
