//! Endpoint URLs
//!
//! Every path the client calls, built against a resolved base URL. Both the
//! native client and the browser page go through these.

/// `GET /api/search?q=`
pub fn search(base: &str, query: &str) -> String {
    format!("{}/api/search?q={}", base, urlencoding::encode(query))
}

/// `POST /api/progress`
pub fn progress(base: &str) -> String {
    format!("{}/api/progress", base)
}

/// `GET /api/progress/dashboard?user_id=`
pub fn dashboard(base: &str, user_id: &str) -> String {
    format!(
        "{}/api/progress/dashboard?user_id={}",
        base,
        urlencoding::encode(user_id)
    )
}

/// `GET /api/practice/topics`
pub fn practice_topics(base: &str) -> String {
    format!("{}/api/practice/topics", base)
}

/// `GET /api/practice` (every template)
pub fn practice_templates(base: &str) -> String {
    format!("{}/api/practice", base)
}

/// `GET /api/practice?topic_id=`
pub fn practice_for_topic(base: &str, topic_id: i64) -> String {
    format!("{}/api/practice?topic_id={}", base, topic_id)
}

/// `GET /api/practice/{id}`
pub fn practice_template(base: &str, template_id: i64) -> String {
    format!("{}/api/practice/{}", base, template_id)
}

/// `POST /api/practice/ledger/validate`, scoped to a scenario when one is chosen
pub fn ledger_validate(base: &str, template_id: Option<i64>) -> String {
    match template_id {
        Some(id) => format!("{}/api/practice/ledger/validate?template_id={}", base, id),
        None => format!("{}/api/practice/ledger/validate", base),
    }
}

/// `GET /health`
pub fn health(base: &str) -> String {
    format!("{}/health", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://127.0.0.1:8000";

    #[test]
    fn test_search_encodes_query() {
        assert_eq!(
            search(BASE, "revenue & leases"),
            "http://127.0.0.1:8000/api/search?q=revenue%20%26%20leases"
        );
    }

    #[test]
    fn test_dashboard_encodes_user() {
        assert_eq!(
            dashboard(BASE, "ana maria"),
            "http://127.0.0.1:8000/api/progress/dashboard?user_id=ana%20maria"
        );
    }

    #[test]
    fn test_practice_paths() {
        assert_eq!(practice_topics(BASE), "http://127.0.0.1:8000/api/practice/topics");
        assert_eq!(practice_templates(BASE), "http://127.0.0.1:8000/api/practice");
        assert_eq!(
            practice_for_topic(BASE, 3),
            "http://127.0.0.1:8000/api/practice?topic_id=3"
        );
        assert_eq!(practice_template(BASE, 12), "http://127.0.0.1:8000/api/practice/12");
    }

    #[test]
    fn test_ledger_validate_template_is_optional() {
        assert_eq!(
            ledger_validate(BASE, None),
            "http://127.0.0.1:8000/api/practice/ledger/validate"
        );
        assert_eq!(
            ledger_validate(BASE, Some(5)),
            "http://127.0.0.1:8000/api/practice/ledger/validate?template_id=5"
        );
    }
}
