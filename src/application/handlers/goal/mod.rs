//! Goal command and query handlers.

mod complete_goal;
mod delete_goal;
mod list_goals;
mod save_goal;

pub use complete_goal::{
    CompleteGoalCommand, CompleteGoalError, CompleteGoalHandler, CompleteGoalResult,
};
pub use delete_goal::{DeleteGoalCommand, DeleteGoalError, DeleteGoalHandler};
pub use list_goals::{GoalView, ListGoalsError, ListGoalsHandler};
pub use save_goal::{SaveGoalCommand, SaveGoalError, SaveGoalHandler, SubTaskInput};
