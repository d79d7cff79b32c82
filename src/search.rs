//! Topic search: query validation and the status line that follows a lookup.

use thiserror::Error;

use crate::dto::Topic;
use crate::status::{self, Status};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a search term.")]
    Empty,
}

impl QueryError {
    pub fn status(&self) -> Status {
        Status::error(self.to_string())
    }
}

/// Trim a raw search box value, rejecting blank input
pub fn normalize_query(raw: &str) -> Result<&str, QueryError> {
    let query = raw.trim();
    if query.is_empty() {
        Err(QueryError::Empty)
    } else {
        Ok(query)
    }
}

/// Status line after a successful lookup
pub fn results_status(topics: &[Topic]) -> Status {
    if topics.is_empty() {
        Status::info(status::NO_TOPICS)
    } else {
        Status::success(format!("Found {} topic(s).", topics.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKind;

    fn topic(id: i64) -> Topic {
        Topic {
            id,
            name: format!("Topic {}", id),
            asc_reference: None,
            oer_link: None,
            fasb_link: None,
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  leases "), Ok("leases"));
        assert_eq!(normalize_query("   "), Err(QueryError::Empty));
        assert_eq!(QueryError::Empty.status().message, status::EMPTY_QUERY);
    }

    #[test]
    fn test_results_status() {
        let none = results_status(&[]);
        assert_eq!(none.kind, StatusKind::Info);
        assert_eq!(none.message, status::NO_TOPICS);

        let some = results_status(&[topic(1), topic(2)]);
        assert_eq!(some.kind, StatusKind::Success);
        assert_eq!(some.message, "Found 2 topic(s).");
    }
}
