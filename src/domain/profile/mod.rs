//! Profile module - user progression and score history.

mod profile;
mod score_entry;

pub use profile::UserProfile;
pub use score_entry::ScoreHistoryEntry;
