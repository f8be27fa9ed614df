//! Goal tag enum for categorizing goals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Category tag attached to a goal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GoalTag {
    Work,
    Health,
    Personal,
    Finance,
    Creative,
    Learning,
    Social,
    Other,
}

impl GoalTag {
    /// Returns all tags in display order.
    pub fn all() -> [GoalTag; 8] {
        [
            GoalTag::Work,
            GoalTag::Health,
            GoalTag::Personal,
            GoalTag::Finance,
            GoalTag::Creative,
            GoalTag::Learning,
            GoalTag::Social,
            GoalTag::Other,
        ]
    }

    /// Returns the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            GoalTag::Work => "work",
            GoalTag::Health => "health",
            GoalTag::Personal => "personal",
            GoalTag::Finance => "finance",
            GoalTag::Creative => "creative",
            GoalTag::Learning => "learning",
            GoalTag::Social => "social",
            GoalTag::Other => "other",
        }
    }
}

impl fmt::Display for GoalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GoalTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(GoalTag::Work),
            "health" => Ok(GoalTag::Health),
            "personal" => Ok(GoalTag::Personal),
            "finance" => Ok(GoalTag::Finance),
            "creative" => Ok(GoalTag::Creative),
            "learning" => Ok(GoalTag::Learning),
            "social" => Ok(GoalTag::Social),
            "other" => Ok(GoalTag::Other),
            _ => Err(ValidationError::invalid_format(
                "tag",
                format!("unknown tag '{}'", s),
            )),
        }
    }
}
