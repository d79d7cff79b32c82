//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;
pub mod status_line;
pub mod topic_card;

pub use nav::Nav;
pub use status_line::StatusLine;
pub use topic_card::TopicCard;
