//! State Management
//!
//! Page-wide signals and the browser-backed user id store.

pub mod global;
pub mod storage;
