//! API Base URL
//!
//! Decides which origin the API calls go to. An explicit override wins; a page
//! served over HTTP(S) talks to its own origin; anything else (a page opened
//! from `file://`, or no page at all) uses the local development backend.

/// Backend used when nothing better is known
pub const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

/// The parts of `window.location` that matter here
#[derive(Debug, Clone, Copy)]
pub struct PageLocation<'a> {
    /// Scheme including the colon, e.g. `"https:"`
    pub protocol: &'a str,
    pub origin: &'a str,
}

/// Resolve the API base URL, without a trailing slash
pub fn resolve_api_base(override_url: Option<&str>, location: Option<PageLocation<'_>>) -> String {
    let chosen = match override_url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => match location {
            Some(loc) if loc.protocol == "http:" || loc.protocol == "https:" => loc.origin,
            _ => FALLBACK_API_BASE,
        },
    };
    chosen.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_page_uses_fallback() {
        assert_eq!(resolve_api_base(None, None), FALLBACK_API_BASE);
    }

    #[test]
    fn test_http_page_uses_origin() {
        let loc = PageLocation {
            protocol: "http:",
            origin: "http://127.0.0.1:8000",
        };
        assert_eq!(resolve_api_base(None, Some(loc)), "http://127.0.0.1:8000");

        let loc = PageLocation {
            protocol: "https:",
            origin: "https://study.example.edu",
        };
        assert_eq!(resolve_api_base(None, Some(loc)), "https://study.example.edu");
    }

    #[test]
    fn test_file_page_uses_fallback() {
        let loc = PageLocation {
            protocol: "file:",
            origin: "null",
        };
        assert_eq!(resolve_api_base(None, Some(loc)), FALLBACK_API_BASE);
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        let loc = PageLocation {
            protocol: "https:",
            origin: "https://study.example.edu",
        };
        assert_eq!(
            resolve_api_base(Some("http://api.local:9000/"), Some(loc)),
            "http://api.local:9000"
        );
        // Blank override is ignored
        assert_eq!(resolve_api_base(Some("  "), Some(loc)), "https://study.example.edu");
    }
}
