//! Goal module - the tracked objective aggregate.

mod aggregate;
mod subtask;

pub use aggregate::{Goal, GoalAttributes, MAX_NAME_LENGTH};
pub use subtask::SubTask;
