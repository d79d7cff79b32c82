//! StudyHub
//!
//! Browser front end for the accounting study hub, built with Leptos (WASM).
//!
//! # Features
//!
//! - Topic search with progress tracking
//! - Practice scenario browser
//! - Ledger simulator for double-entry checks
//! - Progress dashboard
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. Every interaction is a
//! single request to the StudyHub API; URLs, messages and ledger rules come
//! from the shared `studyhub` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
