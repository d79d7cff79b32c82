//! Pages
//!
//! One component per hash page.

pub mod dashboard;
pub mod ledger;
pub mod practice;
pub mod search;

pub use dashboard::Dashboard;
pub use ledger::Ledger;
pub use practice::Practice;
pub use search::Search;
