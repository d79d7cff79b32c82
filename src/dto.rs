//! Wire Types
//!
//! Request and response bodies exchanged with the StudyHub API. All of these
//! are owned by the server; the client only displays or transmits them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::progress::ProgressStatus;

/// A study topic as returned by search and the practice topic list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub asc_reference: Option<String>,
    #[serde(default)]
    pub oer_link: Option<String>,
    #[serde(default)]
    pub fasb_link: Option<String>,
}

impl Topic {
    /// Name shown on a result card
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Untitled Topic"
        } else {
            &self.name
        }
    }

    /// Reference line shown under the title
    pub fn reference_line(&self) -> String {
        match self.asc_reference.as_deref().filter(|r| !r.is_empty()) {
            Some(reference) => format!("ASC Reference: {}", reference),
            None => "ASC Reference: N/A".to_string(),
        }
    }

    /// External links in display order, skipping empty ones
    pub fn links(&self) -> Vec<TopicLink> {
        let mut links = Vec::new();
        if let Some(href) = self.oer_link.as_deref().filter(|l| !l.is_empty()) {
            links.push(TopicLink {
                href: href.to_string(),
                label: "OER resource",
            });
        }
        if let Some(href) = self.fasb_link.as_deref().filter(|l| !l.is_empty()) {
            links.push(TopicLink {
                href: href.to_string(),
                label: "FASB Codification (Basic View)",
            });
        }
        links
    }
}

/// One external link of a topic
#[derive(Debug, Clone, PartialEq)]
pub struct TopicLink {
    pub href: String,
    pub label: &'static str,
}

/// Separator placed between topic links
pub const LINK_SEPARATOR: &str = " · ";

/// A practice scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeTemplate {
    pub id: i64,
    pub topic_id: i64,
    pub template_text: String,
    #[serde(default)]
    pub expected_entries: Option<Vec<LedgerEntry>>,
}

/// One journal line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub account: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerValidateRequest {
    pub entries: Vec<LedgerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerValidateResponse {
    pub balanced: bool,
    #[serde(default)]
    pub total_debits: f64,
    #[serde(default)]
    pub total_credits: f64,
    #[serde(default)]
    pub hint: Option<String>,
    /// Only present when validated against a scenario
    #[serde(default)]
    pub correct: Option<bool>,
    pub message: String,
}

/// Body of `POST /api/progress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLogCreate {
    pub user_id: String,
    pub topic_id: i64,
    pub status: ProgressStatus,
    /// Serialized as `null` when absent
    pub notes: Option<String>,
}

/// Server echo of a stored progress entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    pub id: i64,
    pub user_id: String,
    pub topic_id: i64,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Aggregated progress for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics_viewed: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics_in_progress: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics_mastered: u64,
    /// Entries that are not activity objects are dropped
    #[serde(default, deserialize_with = "skip_malformed")]
    pub recent_activity: Vec<Activity>,
}

/// One recent progress event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub topic_id: i64,
    #[serde(default)]
    pub topic_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `null` and a missing key both read as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let items = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_defaults_when_fields_missing() {
        let topic: Topic = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(topic.display_name(), "Untitled Topic");
        assert_eq!(topic.reference_line(), "ASC Reference: N/A");
        assert!(topic.links().is_empty());
    }

    #[test]
    fn test_topic_links_order() {
        let topic = Topic {
            id: 1,
            name: "Leases".to_string(),
            asc_reference: Some("842".to_string()),
            oer_link: Some("https://oer.example/leases".to_string()),
            fasb_link: Some("https://asc.fasb.org/842".to_string()),
        };
        let labels: Vec<_> = topic.links().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["OER resource", "FASB Codification (Basic View)"]);
        assert_eq!(topic.reference_line(), "ASC Reference: 842");
    }

    #[test]
    fn test_progress_body_serializes_null_notes() {
        let body = ProgressLogCreate {
            user_id: "ana".to_string(),
            topic_id: 7,
            status: ProgressStatus::InProgress,
            notes: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": "ana",
                "topic_id": 7,
                "status": "in_progress",
                "notes": null,
            })
        );
    }

    #[test]
    fn test_dashboard_counts_default_to_zero() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"user_id": "ana", "topics_viewed": 2}"#).unwrap();
        assert_eq!(summary.topics_viewed, 2);
        assert_eq!(summary.topics_in_progress, 0);
        assert_eq!(summary.topics_mastered, 0);
        assert!(summary.recent_activity.is_empty());
    }

    #[test]
    fn test_dashboard_tolerates_nulls() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"user_id": null, "topics_viewed": 2, "topics_in_progress": null, "topics_mastered": null, "recent_activity": null}"#,
        )
        .unwrap();
        assert_eq!(summary.user_id, "");
        assert_eq!(summary.topics_viewed, 2);
        assert_eq!(summary.topics_in_progress, 0);
        assert_eq!(summary.topics_mastered, 0);
        assert!(summary.recent_activity.is_empty());
    }

    #[test]
    fn test_dashboard_keeps_partial_activity() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"topics_viewed": 1, "recent_activity": [
                {"topic_id": 1, "timestamp": null},
                "garbage",
                {"status": "viewed"},
                {"topic_id": 2, "topic_name": "Leases", "status": "mastered"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(summary.recent_activity.len(), 2);
        assert_eq!(summary.recent_activity[0].topic_id, 1);
        assert!(summary.recent_activity[0].status.is_none());
        assert_eq!(summary.recent_activity[1].status.as_deref(), Some("mastered"));
    }

    #[test]
    fn test_topic_null_name() {
        let topics: Vec<Topic> =
            serde_json::from_str(r#"[{"id": 1, "name": null}, {"id": 2, "name": "Leases"}]"#).unwrap();
        assert_eq!(topics[0].display_name(), "Untitled Topic");
        assert_eq!(topics[1].display_name(), "Leases");
    }

    #[test]
    fn test_ledger_response_without_scenario() {
        let resp: LedgerValidateResponse = serde_json::from_str(
            r#"{"balanced": true, "total_debits": 100.0, "total_credits": 100.0, "message": "Balanced."}"#,
        )
        .unwrap();
        assert!(resp.correct.is_none());
        assert!(resp.hint.is_none());
    }
}
