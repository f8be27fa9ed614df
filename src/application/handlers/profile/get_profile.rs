//! GetProfileHandler - read-side query for the user's progression.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::{ScoreHistoryEntry, UserProfile};
use crate::ports::ProfileStore;

/// The profile together with the completion log that produced it.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub history: Vec<ScoreHistoryEntry>,
}

/// Handler for reading the profile and score history.
pub struct GetProfileHandler {
    profile_store: Arc<dyn ProfileStore>,
}

impl GetProfileHandler {
    pub fn new(profile_store: Arc<dyn ProfileStore>) -> Self {
        Self { profile_store }
    }

    pub async fn handle(&self) -> Result<ProfileView, DomainError> {
        let profile = self.profile_store.load_profile().await?;
        let history = self.profile_store.score_history().await?;
        Ok(ProfileView { profile, history })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::{GoalId, Timestamp};
    use std::collections::BTreeSet;

    #[tokio::test]
    async fn fresh_store_yields_level_one_profile_and_empty_history() {
        let store = Arc::new(InMemoryStore::new());
        let handler = GetProfileHandler::new(store);

        let view = handler.handle().await.unwrap();

        assert_eq!(view.profile.level(), 1);
        assert_eq!(view.profile.total_score(), 0.0);
        assert_eq!(view.profile.score_to_next_level(), 10.0);
        assert!(view.history.is_empty());
    }

    #[tokio::test]
    async fn history_is_returned_oldest_first() {
        let store = Arc::new(InMemoryStore::new());

        let mut profile = store.load_profile().await.unwrap();
        for (name, score) in [("First", 5.0), ("Second", 7.5)] {
            profile.credit_score(score).unwrap();
            let entry = ScoreHistoryEntry::reconstitute(
                Default::default(),
                GoalId::new(),
                name.to_string(),
                score,
                Timestamp::now(),
                BTreeSet::new(),
            );
            store.record_completion(&profile, &entry).await.unwrap();
        }

        let handler = GetProfileHandler::new(store);
        let view = handler.handle().await.unwrap();

        assert_eq!(view.history.len(), 2);
        assert_eq!(view.history[0].goal_name(), "First");
        assert_eq!(view.history[1].goal_name(), "Second");
        assert_eq!(view.profile.total_score(), 12.5);
    }
}
