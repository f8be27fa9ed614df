//! Leveling engine - maps cumulative score to level thresholds.
//!
//! Level is a deterministic function of total score, and the score
//! thresholds are a deterministic function of level. Stored derived
//! fields must always be recomputed through these three functions so
//! they can never drift from the formulas.

/// Level for a cumulative total score.
///
/// `level = 1 + floor(sqrt(total_score / 10))`, total_score >= 0.
pub fn level_for_score(total_score: f64) -> u32 {
    // sqrt of a negative would yield NaN; the profile keeps the total
    // non-negative, this guard covers direct callers.
    let total = total_score.max(0.0);
    1 + (total / 10.0).sqrt().floor() as u32
}

/// Minimum cumulative score required to be at `level`.
///
/// `score = (level - 1)^2 * 10`
pub fn score_for_current_level(level: u32) -> f64 {
    let base = level.saturating_sub(1) as f64;
    base * base * 10.0
}

/// Minimum cumulative score required to reach `level + 1`.
///
/// `score = level^2 * 10`
pub fn score_to_next_level(level: u32) -> f64 {
    let l = level as f64;
    l * l * 10.0
}
