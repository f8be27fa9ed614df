//! SubTask entity - a checklist item within a goal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubTaskId, ValidationError};

/// A single checklist item belonging to a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    id: SubTaskId,
    text: String,
    completed: bool,
}

impl SubTask {
    /// Creates a new, unchecked subtask.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if text is empty
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("subtask_text"));
        }
        Ok(Self {
            id: SubTaskId::new(),
            text,
            completed: false,
        })
    }

    /// Reconstitute a subtask from persistence (no validation).
    pub fn reconstitute(id: SubTaskId, text: String, completed: bool) -> Self {
        Self {
            id,
            text,
            completed,
        }
    }

    /// Returns the subtask ID.
    pub fn id(&self) -> &SubTaskId {
        &self.id
    }

    /// Returns the subtask text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the subtask is checked off.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flips the completed flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
