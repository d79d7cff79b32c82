//! HTTP API Client
//!
//! Functions for communicating with the StudyHub REST API from the browser.
//! Errors are plain strings; callers log them and show a generic status.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use studyhub::base_url::{resolve_api_base, PageLocation};
use studyhub::endpoints;
use studyhub::{
    DashboardSummary, LedgerEntry, LedgerValidateRequest, LedgerValidateResponse,
    PracticeTemplate, ProgressLogCreate, ProgressStatus, Topic,
};

/// Global a hosting page can set to point the app at another backend
const OVERRIDE_GLOBAL: &str = "API_BASE_URL";

/// Resolve the API base URL from `window.API_BASE_URL` and the page location
pub fn get_api_base() -> String {
    let Some(window) = web_sys::window() else {
        return resolve_api_base(None, None);
    };

    let override_url = js_sys::Reflect::get(&window, &JsValue::from_str(OVERRIDE_GLOBAL))
        .ok()
        .and_then(|v| v.as_string());

    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let origin = location.origin().unwrap_or_default();

    resolve_api_base(
        override_url.as_deref(),
        Some(PageLocation {
            protocol: &protocol,
            origin: &origin,
        }),
    )
}

// ============ Helpers ============

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    parse(response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ API Functions ============

/// Search topics by name
pub async fn search_topics(query: &str) -> Result<Vec<Topic>, String> {
    get_json(&endpoints::search(&get_api_base(), query)).await
}

/// Outcome of a progress submission
pub enum ProgressOutcome {
    Logged,
    /// The server answered with a non-2xx status
    Rejected(u16),
}

/// Record a progress status. `Err` means the server could not be reached.
pub async fn log_progress(
    user_id: &str,
    topic_id: i64,
    status: ProgressStatus,
) -> Result<ProgressOutcome, String> {
    let body = ProgressLogCreate {
        user_id: user_id.to_string(),
        topic_id,
        status,
        notes: None,
    };

    let response = Request::post(&endpoints::progress(&get_api_base()))
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(ProgressOutcome::Logged)
    } else {
        Ok(ProgressOutcome::Rejected(response.status()))
    }
}

/// Topics that have practice scenarios
pub async fn fetch_practice_topics() -> Result<Vec<Topic>, String> {
    get_json(&endpoints::practice_topics(&get_api_base())).await
}

/// Practice scenarios for one topic
pub async fn fetch_templates_for_topic(topic_id: i64) -> Result<Vec<PracticeTemplate>, String> {
    get_json(&endpoints::practice_for_topic(&get_api_base(), topic_id)).await
}

/// Every practice scenario
pub async fn fetch_templates() -> Result<Vec<PracticeTemplate>, String> {
    get_json(&endpoints::practice_templates(&get_api_base())).await
}

/// One practice scenario
pub async fn fetch_template(template_id: i64) -> Result<PracticeTemplate, String> {
    get_json(&endpoints::practice_template(&get_api_base(), template_id)).await
}

/// Submit journal entries for checking
pub async fn validate_ledger(
    template_id: Option<i64>,
    entries: Vec<LedgerEntry>,
) -> Result<LedgerValidateResponse, String> {
    let response = Request::post(&endpoints::ledger_validate(&get_api_base(), template_id))
        .header("Accept", "application/json")
        .json(&LedgerValidateRequest { entries })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    parse(response).await
}

/// Progress summary for a user
pub async fn fetch_dashboard(user_id: &str) -> Result<DashboardSummary, String> {
    get_json(&endpoints::dashboard(&get_api_base(), user_id)).await
}

/// Log a failed request to the browser console
pub fn log_error(context: &str, error: &str) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}
