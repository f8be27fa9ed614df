//! Attribute value objects for goal scoring inputs.
//!
//! `Attribute` is the shared 1-10 scale used by urgency, impact,
//! motivation, and complexity. `HoursEstimate` is a positive hour count.
//! Both reject invalid input at construction, so the scoring engine can
//! assume every divisor it receives is non-zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A goal attribute on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(u8);

impl Attribute {
    /// Minimum attribute value.
    pub const MIN: Self = Self(1);

    /// Maximum attribute value.
    pub const MAX: Self = Self(10);

    /// Creates an Attribute, returning error if outside 1-10.
    pub fn try_new(field: &str, value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(field, 1, 10, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for score arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A time estimate in hours, finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoursEstimate(f64);

impl HoursEstimate {
    /// Creates an HoursEstimate, returning error unless finite and > 0.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::not_positive("time_estimate", value));
        }
        Ok(Self(value))
    }

    /// Returns the hour count as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for HoursEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
