//! # StudyHub
//!
//! Client for the accounting study hub: topic search, practice scenarios, a
//! double-entry ledger checker and a progress dashboard. The backend does the
//! real work; this crate asks it questions and shapes the answers for display.
//!
//! ## Modules
//!
//! Shared by every target, including the `studyhub-ui` WASM page:
//!
//! - [`dto`]: request and response bodies
//! - [`endpoints`]: URLs of every API call
//! - [`base_url`]: which origin the API calls go to
//! - [`nav`]: hash navigation between pages
//! - [`search`], [`practice`], [`ledger`], [`dashboard`]: per-page rules
//! - [`status`]: status lines and their messages
//! - [`user`]: the persisted user id
//!
//! Native only (`native` feature, on by default):
//!
//! - [`client`]: reqwest API client
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studyhub::{ledger, StudyHubClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StudyHubClient::new("http://127.0.0.1:8000");
//!
//!     for topic in client.search("leases").await? {
//!         println!("{} ({})", topic.display_name(), topic.reference_line());
//!     }
//!
//!     let rows = [
//!         ledger::LedgerRow::new("Supplies", "500", ""),
//!         ledger::LedgerRow::new("Accounts Payable", "", "500"),
//!     ];
//!     let response = client.validate_ledger(None, ledger::collect_entries(&rows)?).await?;
//!     println!("{}", ledger::verdict(&response));
//!
//!     Ok(())
//! }
//! ```

pub mod base_url;
pub mod dashboard;
pub mod dto;
pub mod endpoints;
pub mod ledger;
pub mod nav;
pub mod practice;
pub mod progress;
pub mod search;
pub mod status;
pub mod user;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

pub use base_url::{resolve_api_base, PageLocation, FALLBACK_API_BASE};
pub use dto::{
    Activity, DashboardSummary, HealthResponse, LedgerEntry, LedgerValidateRequest,
    LedgerValidateResponse, PracticeTemplate, ProgressLog, ProgressLogCreate, Topic, TopicLink,
};
pub use ledger::{LedgerError, LedgerRow};
pub use nav::Page;
pub use progress::ProgressStatus;
pub use search::QueryError;
pub use status::{Status, StatusKind};
pub use user::{StoreError, UserIdStore, USER_ID_KEY};

#[cfg(feature = "native")]
pub use client::{ClientError, StudyHubClient};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
