//! StudyHub REST API Client
//!
//! HTTP client for the StudyHub backend. One request per call; failures are
//! returned to the caller, which turns them into a status line.

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::base_url::resolve_api_base;
use crate::dto::{
    DashboardSummary, HealthResponse, LedgerEntry, LedgerValidateRequest,
    LedgerValidateResponse, PracticeTemplate, ProgressLog, ProgressLogCreate, Topic,
};
use crate::endpoints;
use crate::progress::ProgressStatus;

/// StudyHub API client
#[derive(Debug, Clone)]
pub struct StudyHubClient {
    client: Client,
    base_url: String,
}

impl StudyHubClient {
    /// Create a client for the API at `base_url` (trailing slash optional).
    /// A blank URL falls back to the local development backend.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: resolve_api_base(Some(base_url), None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search topics by name
    pub async fn search(&self, query: &str) -> Result<Vec<Topic>, ClientError> {
        self.get_json(&endpoints::search(&self.base_url, query)).await
    }

    /// Record a progress status for a topic, returning the stored entry
    pub async fn log_progress(
        &self,
        user_id: &str,
        topic_id: i64,
        status: ProgressStatus,
        notes: Option<String>,
    ) -> Result<ProgressLog, ClientError> {
        let body = ProgressLogCreate {
            user_id: user_id.to_string(),
            topic_id,
            status,
            notes,
        };

        let url = endpoints::progress(&self.base_url);
        tracing::debug!(%url, topic_id, %status, "Logging progress");

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        decode(check_status(response).await?).await
    }

    /// Topics that have practice scenarios
    pub async fn practice_topics(&self) -> Result<Vec<Topic>, ClientError> {
        self.get_json(&endpoints::practice_topics(&self.base_url))
            .await
    }

    /// Every practice scenario
    pub async fn practice_templates(&self) -> Result<Vec<PracticeTemplate>, ClientError> {
        self.get_json(&endpoints::practice_templates(&self.base_url))
            .await
    }

    /// Practice scenarios for one topic
    pub async fn templates_for_topic(
        &self,
        topic_id: i64,
    ) -> Result<Vec<PracticeTemplate>, ClientError> {
        self.get_json(&endpoints::practice_for_topic(&self.base_url, topic_id))
            .await
    }

    /// One practice scenario
    pub async fn practice_template(&self, template_id: i64) -> Result<PracticeTemplate, ClientError> {
        self.get_json(&endpoints::practice_template(&self.base_url, template_id))
            .await
    }

    /// Submit journal entries for balance (and, with a template, correctness) checking
    pub async fn validate_ledger(
        &self,
        template_id: Option<i64>,
        entries: Vec<LedgerEntry>,
    ) -> Result<LedgerValidateResponse, ClientError> {
        let url = endpoints::ledger_validate(&self.base_url, template_id);
        tracing::debug!(%url, entries = entries.len(), "Validating ledger");

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(&LedgerValidateRequest { entries })
            .send()
            .await?;

        decode(check_status(response).await?).await
    }

    /// Progress summary for a user
    pub async fn dashboard(&self, user_id: &str) -> Result<DashboardSummary, ClientError> {
        self.get_json(&endpoints::dashboard(&self.base_url, user_id))
            .await
    }

    /// Check that the backend is up
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_json(&endpoints::health(&self.base_url)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        decode(check_status(response).await?).await
    }
}

/// Turn a non-2xx response into [`ClientError::Status`]
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %body, "API returned an error");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Decode)
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the StudyHub API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, DNS failure, broken body stream
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// True when the server answered, even if with an error
    pub fn is_server_response(&self) -> bool {
        matches!(self, ClientError::Status { .. } | ClientError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Deserialize)]
    struct SearchParams {
        q: String,
    }

    #[derive(Deserialize)]
    struct TopicParams {
        topic_id: i64,
    }

    #[derive(Deserialize)]
    struct ValidateParams {
        template_id: Option<i64>,
    }

    #[derive(Deserialize)]
    struct DashboardParams {
        user_id: String,
    }

    fn leases() -> Value {
        json!({
            "id": 1,
            "name": "Leases",
            "asc_reference": "842",
            "oer_link": "https://oer.example/leases",
        })
    }

    fn scenario(id: i64, topic_id: i64) -> Value {
        json!({
            "id": id,
            "topic_id": topic_id,
            "template_text": format!("Scenario {}", id),
        })
    }

    fn stub_api() -> Router {
        Router::new()
            .route("/health", get(|| async { Json(json!({"status": "ok"})) }))
            .route(
                "/api/search",
                get(|Query(p): Query<SearchParams>| async move {
                    if p.q.to_lowercase().contains("lease") {
                        Json(json!([leases()]))
                    } else {
                        Json(json!([]))
                    }
                }),
            )
            .route(
                "/api/progress",
                post(|Json(body): Json<Value>| async move {
                    if body["topic_id"] == 404 {
                        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Topic not found"})));
                    }
                    assert!(body["notes"].is_null());
                    (
                        StatusCode::CREATED,
                        Json(json!({
                            "id": 10,
                            "user_id": body["user_id"],
                            "topic_id": body["topic_id"],
                            "timestamp": "2026-03-01T09:30:00",
                            "status": body["status"],
                            "notes": null,
                        })),
                    )
                }),
            )
            .route(
                "/api/progress/dashboard",
                get(|Query(p): Query<DashboardParams>| async move {
                    Json(json!({
                        "user_id": p.user_id,
                        "topics_viewed": 3,
                        "topics_in_progress": 1,
                        "recent_activity": [
                            {"topic_id": 1, "topic_name": "Leases", "status": "viewed", "timestamp": "2026-03-01T09:30:00"}
                        ],
                    }))
                }),
            )
            .route("/api/practice/topics", get(|| async { Json(json!([leases()])) }))
            .route(
                "/api/practice",
                get(|p: Option<Query<TopicParams>>| async move {
                    match p {
                        Some(Query(TopicParams { topic_id })) => Json(json!([scenario(7, topic_id)])),
                        None => Json(json!([scenario(7, 1), scenario(8, 2)])),
                    }
                }),
            )
            .route(
                "/api/practice/:id",
                get(|Path(id): Path<i64>| async move {
                    if id == 99 {
                        Err(StatusCode::NOT_FOUND)
                    } else {
                        Ok(Json(scenario(id, 1)))
                    }
                }),
            )
            .route(
                "/api/practice/ledger/validate",
                post(
                    |Query(p): Query<ValidateParams>, Json(body): Json<LedgerValidateRequest>| async move {
                        let debits: f64 = body.entries.iter().map(|e| e.debit).sum();
                        let credits: f64 = body.entries.iter().map(|e| e.credit).sum();
                        let balanced = (debits - credits).abs() < 0.005;
                        Json(json!({
                            "balanced": balanced,
                            "total_debits": debits,
                            "total_credits": credits,
                            "hint": if balanced { Value::Null } else { json!("Check your credits.") },
                            "correct": p.template_id.map(|_| false),
                            "message": if balanced { "Debits equal credits." } else { "Not balanced." },
                        }))
                    },
                ),
            )
    }

    async fn spawn_stub() -> StudyHubClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub_api()).await.unwrap();
        });
        StudyHubClient::new(&format!("http://{}/", addr))
    }

    #[test]
    fn test_base_url_normalized() {
        assert_eq!(StudyHubClient::new("http://api.local:9000/").base_url(), "http://api.local:9000");
        assert_eq!(StudyHubClient::new("").base_url(), crate::base_url::FALLBACK_API_BASE);
    }

    #[tokio::test]
    async fn test_search() {
        let client = spawn_stub().await;

        let topics = client.search("lease accounting").await.unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "Leases");
        assert!(topics[0].fasb_link.is_none());

        assert!(client.search("goodwill").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_log_progress() {
        let client = spawn_stub().await;

        let logged = client
            .log_progress("ana", 1, ProgressStatus::Mastered, None)
            .await
            .unwrap();
        assert_eq!(logged.id, 10);
        assert_eq!(logged.user_id, "ana");
        assert_eq!(logged.status, "mastered");

        let err = client
            .log_progress("ana", 404, ProgressStatus::Viewed, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
        assert!(err.is_server_response());
    }

    #[tokio::test]
    async fn test_practice_cascade() {
        let client = spawn_stub().await;

        let topics = client.practice_topics().await.unwrap();
        assert_eq!(topics[0].id, 1);

        let templates = client.templates_for_topic(4).await.unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].topic_id, 4);

        let all = client.practice_templates().await.unwrap();
        assert_eq!(all.len(), 2);

        let detail = client.practice_template(8).await.unwrap();
        assert_eq!(detail.template_text, "Scenario 8");

        let missing = client.practice_template(99).await.unwrap_err();
        assert!(matches!(missing, ClientError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_validate_ledger() {
        let client = spawn_stub().await;
        let entries = vec![
            LedgerEntry { account: "Supplies".into(), debit: 500.0, credit: 0.0 },
            LedgerEntry { account: "Accounts Payable".into(), debit: 0.0, credit: 500.0 },
        ];

        let free_form = client.validate_ledger(None, entries.clone()).await.unwrap();
        assert!(free_form.balanced);
        assert!(free_form.correct.is_none());

        let scoped = client.validate_ledger(Some(7), entries[..1].to_vec()).await.unwrap();
        assert!(!scoped.balanced);
        assert_eq!(scoped.correct, Some(false));
        assert_eq!(scoped.hint.as_deref(), Some("Check your credits."));
    }

    #[tokio::test]
    async fn test_dashboard() {
        let client = spawn_stub().await;

        let summary = client.dashboard("ana maria").await.unwrap();
        assert_eq!(summary.user_id, "ana maria");
        assert_eq!(summary.topics_viewed, 3);
        assert_eq!(summary.topics_mastered, 0);
        assert_eq!(summary.recent_activity.len(), 1);
    }

    #[tokio::test]
    async fn test_health() {
        let client = spawn_stub().await;
        assert_eq!(client.health().await.unwrap().status, "ok");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Bind then drop to get a port nobody is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = StudyHubClient::new(&format!("http://{}", addr));
        let err = client.search("leases").await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
        assert!(!err.is_server_response());
    }
}
