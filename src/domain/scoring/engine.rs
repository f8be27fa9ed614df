//! Scoring engine - pure numeric formulas over goal attributes.
//!
//! All functions are stateless and referentially transparent. "Today"
//! is an explicit input to the deadline indicator rather than a clock
//! read, so every function here is testable with fixed inputs.
//!
//! Inputs arrive through the validated attribute value objects, so the
//! divisors (motivation, time_estimate * complexity) are never zero and
//! results are always finite. No rounding is applied internally;
//! display formatting is a presentation concern.

use chrono::NaiveDate;

use super::DeadlineIndicator;

/// Derived cost of a goal: time and complexity, discounted by motivation.
///
/// `effort = (time_estimate * complexity) / motivation`
pub fn effort(time_estimate: f64, complexity: f64, motivation: f64) -> f64 {
    (time_estimate * complexity) / motivation
}

/// Ranking metric favoring high impact/urgency relative to effort.
///
/// `priority_score = (impact * urgency) / effort`
pub fn priority_score(impact: f64, urgency: f64, effort: f64) -> f64 {
    (impact * urgency) / effort
}

/// The XP-like value credited on completion.
///
/// `cumulative_score = (impact * urgency * motivation^2) / (time_estimate * complexity)`
pub fn cumulative_score(
    impact: f64,
    urgency: f64,
    motivation: f64,
    time_estimate: f64,
    complexity: f64,
) -> f64 {
    (impact * urgency * motivation.powi(2)) / (time_estimate * complexity)
}

/// Three-tier deadline proximity indicator.
///
/// Days remaining is the calendar-day difference between the deadline
/// and `today`; time-of-day never enters the comparison.
pub fn deadline_indicator(end_date: NaiveDate, today: NaiveDate) -> DeadlineIndicator {
    let days_remaining = (end_date - today).num_days();
    if days_remaining <= 0 {
        DeadlineIndicator::Red
    } else if days_remaining <= 3 {
        DeadlineIndicator::Orange
    } else {
        DeadlineIndicator::Green
    }
}
