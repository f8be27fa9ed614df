//! Scoring module - pure derived-value formulas.

pub mod engine;
mod values;

pub use engine::{cumulative_score, deadline_indicator, effort, priority_score};
pub use values::{DeadlineIndicator, GoalScores};
