//! Practice scenario labels.

use crate::dto::PracticeTemplate;

/// Characters of scenario text shown on a scenario button
pub const LIST_PREVIEW_CHARS: usize = 80;

/// Characters of scenario text shown in the ledger template selector
pub const SELECT_PREVIEW_CHARS: usize = 50;

const ELLIPSIS: char = '…';

/// First `limit` characters of `text`, with an ellipsis when anything was cut
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut short = text[..cut].to_string();
            short.push(ELLIPSIS);
            short
        }
        None => text.to_string(),
    }
}

/// Label of a scenario button in the practice list
pub fn list_label(template: &PracticeTemplate) -> String {
    preview(&template.template_text, LIST_PREVIEW_CHARS)
}

/// Label of a template option in the ledger selector: `#<id> <text>…`
pub fn option_label(template: &PracticeTemplate) -> String {
    let head: String = template
        .template_text
        .chars()
        .take(SELECT_PREVIEW_CHARS)
        .collect();
    format!("#{} {}{}", template.id, head, ELLIPSIS)
}

/// Keep `selected` only when it names one of the loaded templates
pub fn known_template(selected: Option<i64>, templates: &[PracticeTemplate]) -> Option<i64> {
    selected.filter(|id| templates.iter().any(|t| t.id == *id))
}
