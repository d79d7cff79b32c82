//! Dashboard activity lines.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::dto::Activity;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown for an activity the server sent without a status
const UNKNOWN_STATUS: &str = "unknown";

/// Render a server timestamp in local time.
///
/// Timestamps carrying an offset are converted; naive ones are taken as
/// already local. Anything else is shown as sent.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return match Local.from_local_datetime(&naive).earliest() {
                Some(local) => local.format(DISPLAY_FORMAT).to_string(),
                None => naive.format(DISPLAY_FORMAT).to_string(),
            };
        }
    }
    raw.to_string()
}

/// `<topic>: <status>` plus ` at <time>` when the event has a timestamp
pub fn activity_line(activity: &Activity) -> String {
    let topic = match activity.topic_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("Topic {}", activity.topic_id),
    };

    let status = activity
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_STATUS);

    let mut line = format!("{}: {}", topic, status);
    if let Some(ts) = activity.timestamp.as_deref().filter(|t| !t.is_empty()) {
        line.push_str(" at ");
        line.push_str(&format_timestamp(ts));
    }
    line
}
