//! Progress statuses a user can record against a topic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Viewed,
    InProgress,
    Mastered,
}

impl ProgressStatus {
    /// Every status, in the order the track buttons are shown
    pub const ALL: [ProgressStatus; 3] = [
        ProgressStatus::Viewed,
        ProgressStatus::InProgress,
        ProgressStatus::Mastered,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Viewed => "viewed",
            ProgressStatus::InProgress => "in_progress",
            ProgressStatus::Mastered => "mastered",
        }
    }

    /// Button label: the wire value with the underscore spelled as a space
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "viewed" => Ok(ProgressStatus::Viewed),
            "in_progress" | "in progress" => Ok(ProgressStatus::InProgress),
            "mastered" => Ok(ProgressStatus::Mastered),
            other => Err(format!(
                "Unknown status: {}. Use: viewed, in_progress, mastered",
                other
            )),
        }
    }
}
