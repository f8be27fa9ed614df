//! Profile store port - user progression and score history persistence.
//!
//! The profile and its history log share one consistency invariant: the
//! profile's total score must equal the sum of history entry scores.
//! `record_completion` is therefore a single atomic multi-write instead
//! of two independent writes, closing the drift gap that sequential
//! saves would leave open. Implementations that cannot be truly atomic
//! must apply a deterministic order: append the history entry first,
//! then replace the profile.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::profile::{ScoreHistoryEntry, UserProfile};

/// Store port for the singleton UserProfile and its score history.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the profile, initializing a fresh level-1 profile on first
    /// access.
    async fn load_profile(&self) -> Result<UserProfile, DomainError>;

    /// Replace the stored profile.
    ///
    /// Only the completion protocol and the repair pass may call this;
    /// no other path writes total_score.
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Return all score history entries, oldest first.
    async fn score_history(&self) -> Result<Vec<ScoreHistoryEntry>, DomainError>;

    /// Persist one completion: append the history entry and replace the
    /// profile as one atomic write (both succeed or neither).
    ///
    /// # Errors
    ///
    /// - `StorageError` if the write fails; the caller surfaces this as
    ///   a persistence failure and may retry the whole protocol
    async fn record_completion(
        &self,
        profile: &UserProfile,
        entry: &ScoreHistoryEntry,
    ) -> Result<(), DomainError>;
}
