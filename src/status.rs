//! Status Messages
//!
//! The one-line feedback every page shows after a user action, with the
//! class that colors it.

use std::fmt;

/// Severity of a status line; maps onto the `error`/`success`/`info` classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
    Info,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Error => "error",
            StatusKind::Success => "success",
            StatusKind::Info => "info",
        }
    }
}

/// A message and how to present it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Info)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============ Messages ============

pub const EMPTY_QUERY: &str = "Please enter a search term.";
pub const SEARCHING: &str = "Searching...";
pub const NO_TOPICS: &str = "No topics found. Try a different search term.";
pub const SEARCH_UNREACHABLE: &str = "Cannot reach the server. Make sure the backend is running.";

pub const PROGRESS_LOGGED: &str = "Progress logged.";
pub const PROGRESS_REJECTED: &str = "Could not log progress.";
pub const PROGRESS_UNREACHABLE: &str = "Could not reach server.";
pub const USER_ID_PROMPT: &str = "Enter your User ID (used for the Dashboard):";

pub const SELECT_TOPIC: &str = "Select a topic";
pub const TOPICS_FAILED: &str = "Failed to load topics";
pub const SCENARIOS_FAILED: &str = "Could not load scenarios.";
pub const SCENARIO_FAILED: &str = "Could not load scenario.";

pub const FREE_FORM: &str = "Free-form (balance only)";
pub const NO_LEDGER_ENTRIES: &str = "Add at least one entry (account and debit or credit).";
pub const CHECKING: &str = "Checking…";
pub const LEDGER_UNREACHABLE: &str = "Could not validate. Is the backend running?";

pub const DASHBOARD_UNREACHABLE: &str = "Could not load dashboard. Is the backend running?";
