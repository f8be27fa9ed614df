//! JSON file storage adapter.
//!
//! Persists goals and progression as two JSON documents in a data
//! directory: `goals.json` (all goal aggregates) and `progression.json`
//! (profile plus score history in one document, so a completion lands
//! in a single file write).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, ProfileId};
use crate::domain::goal::Goal;
use crate::domain::profile::{ScoreHistoryEntry, UserProfile};
use crate::ports::{GoalRepository, ProfileStore};

/// On-disk shape of `progression.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressionDocument {
    profile: Option<UserProfile>,
    history: Vec<ScoreHistoryEntry>,
}

/// File-backed implementation of both storage ports.
#[derive(Debug)]
pub struct JsonFileStore {
    base_path: PathBuf,
    // Serializes read-modify-write cycles on the two documents.
    io_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            io_lock: Mutex::new(()),
        }
    }

    fn goals_path(&self) -> PathBuf {
        self.base_path.join("goals.json")
    }

    fn progression_path(&self) -> PathBuf {
        self.base_path.join("progression.json")
    }

    async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    async fn read_goals(&self) -> Result<Vec<Goal>, DomainError> {
        read_document(&self.goals_path()).await
    }

    async fn write_goals(&self, goals: &[Goal]) -> Result<(), DomainError> {
        self.ensure_dir().await?;
        write_document(&self.goals_path(), &goals).await
    }

    async fn read_progression(&self) -> Result<ProgressionDocument, DomainError> {
        read_document(&self.progression_path()).await
    }

    async fn write_progression(&self, doc: &ProgressionDocument) -> Result<(), DomainError> {
        self.ensure_dir().await?;
        write_document(&self.progression_path(), doc).await
    }
}

/// Read a JSON document, falling back to the default when the file
/// doesn't exist yet.
async fn read_document<T>(path: &Path) -> Result<T, DomainError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match fs::read_to_string(path).await {
        Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to parse {}: {}", path.display(), e),
            )
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(DomainError::storage(e.to_string())),
    }
}

/// Write a JSON document through a temp file and rename, so readers
/// never observe a half-written document.
async fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), DomainError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        DomainError::new(
            ErrorCode::SerializationError,
            format!("Failed to serialize {}: {}", path.display(), e),
        )
    })?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;
    fs::rename(&tmp_path, path)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))
}

#[async_trait]
impl GoalRepository for JsonFileStore {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        let _guard = self.io_lock.lock().await;
        let mut goals = self.read_goals().await?;
        if goals.iter().any(|g| g.id() == goal.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Goal already exists: {}", goal.id()),
            ));
        }
        goals.push(goal.clone());
        self.write_goals(&goals).await
    }

    async fn update(&self, goal: &Goal) -> Result<(), DomainError> {
        let _guard = self.io_lock.lock().await;
        let mut goals = self.read_goals().await?;
        match goals.iter_mut().find(|g| g.id() == goal.id()) {
            Some(slot) => *slot = goal.clone(),
            None => {
                return Err(DomainError::new(
                    ErrorCode::GoalNotFound,
                    format!("Goal not found: {}", goal.id()),
                ))
            }
        }
        self.write_goals(&goals).await
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let _guard = self.io_lock.lock().await;
        let goals = self.read_goals().await?;
        Ok(goals.into_iter().find(|g| g.id() == id))
    }

    async fn find_all(&self) -> Result<Vec<Goal>, DomainError> {
        let _guard = self.io_lock.lock().await;
        self.read_goals().await
    }

    async fn exists(&self, id: &GoalId) -> Result<bool, DomainError> {
        let _guard = self.io_lock.lock().await;
        let goals = self.read_goals().await?;
        Ok(goals.iter().any(|g| g.id() == id))
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        let _guard = self.io_lock.lock().await;
        let mut goals = self.read_goals().await?;
        let before = goals.len();
        goals.retain(|g| g.id() != id);
        if goals.len() == before {
            return Err(DomainError::new(
                ErrorCode::GoalNotFound,
                format!("Goal not found: {}", id),
            ));
        }
        self.write_goals(&goals).await
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn load_profile(&self) -> Result<UserProfile, DomainError> {
        let _guard = self.io_lock.lock().await;
        let mut doc = self.read_progression().await?;
        match doc.profile {
            Some(profile) => Ok(profile),
            None => {
                let profile = UserProfile::new(ProfileId::new());
                doc.profile = Some(profile.clone());
                self.write_progression(&doc).await?;
                Ok(profile)
            }
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let _guard = self.io_lock.lock().await;
        let mut doc = self.read_progression().await?;
        doc.profile = Some(profile.clone());
        self.write_progression(&doc).await
    }

    async fn score_history(&self) -> Result<Vec<ScoreHistoryEntry>, DomainError> {
        let _guard = self.io_lock.lock().await;
        let doc = self.read_progression().await?;
        Ok(doc.history)
    }

    async fn record_completion(
        &self,
        profile: &UserProfile,
        entry: &ScoreHistoryEntry,
    ) -> Result<(), DomainError> {
        // Both sides live in one document; the rename commits them
        // together.
        let _guard = self.io_lock.lock().await;
        let mut doc = self.read_progression().await?;
        doc.history.push(entry.clone());
        doc.profile = Some(profile.clone());
        self.write_progression(&doc).await
    }
}
