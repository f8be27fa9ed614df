//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Leveler domain.

mod attribute;
mod energy;
mod errors;
mod goal_status;
mod ids;
mod progress;
mod recurrence;
mod state_machine;
mod tag;
mod timestamp;

pub use attribute::{Attribute, HoursEstimate};
pub use energy::EnergyLevel;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use goal_status::GoalStatus;
pub use ids::{GoalId, ProfileId, ScoreEntryId, SubTaskId};
pub use progress::Progress;
pub use recurrence::Recurrence;
pub use state_machine::StateMachine;
pub use tag::GoalTag;
pub use timestamp::Timestamp;
