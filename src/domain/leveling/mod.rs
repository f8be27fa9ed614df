//! Leveling module - XP thresholds and level progression.

mod engine;

pub use engine::{level_for_score, score_for_current_level, score_to_next_level};
