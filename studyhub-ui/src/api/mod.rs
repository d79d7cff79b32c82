//! API access from the page.

pub mod client;

pub use client::*;
