//! Status Line Component
//!
//! One line of feedback colored by its kind.

use leptos::*;

use studyhub::Status;

#[component]
pub fn StatusLine(
    #[prop(into)]
    status: Signal<Option<Status>>,
    #[prop(optional)]
    id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <p
            id=id
            class=move || match status.get() {
                Some(s) => format!("status {}", s.kind.css_class()),
                None => "status".to_string(),
            }
            role="status"
        >
            {move || status.get().map(|s| s.message).unwrap_or_default()}
        </p>
    }
}
