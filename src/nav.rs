//! Hash navigation between the four pages.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Search,
    Practice,
    Ledger,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Search, Page::Practice, Page::Ledger, Page::Dashboard];

    /// Hash fragment without the `#`
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Search => "search",
            Page::Practice => "practice",
            Page::Ledger => "ledger",
            Page::Dashboard => "dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Search => "Search",
            Page::Practice => "Practice",
            Page::Ledger => "Ledger Simulator",
            Page::Dashboard => "Dashboard",
        }
    }

    /// DOM id of the page section
    pub fn element_id(&self) -> String {
        format!("page-{}", self.slug())
    }

    pub fn href(&self) -> String {
        format!("#{}", self.slug())
    }

    /// Page for a `location.hash` value, with or without the leading `#`.
    /// Empty and unknown hashes land on search.
    pub fn from_hash(hash: &str) -> Page {
        hash.trim_start_matches('#').parse().unwrap_or_default()
    }
}

impl FromStr for Page {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL.into_iter().find(|p| p.slug() == s).ok_or(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
