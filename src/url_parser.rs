//! URL parser for resolving Google Sheets URLs into identifiers.

use regex::Regex;
use std::sync::LazyLock;

/// A valid sheet URL starts with the https scheme and exactly the docs host.
static DOCS_HOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://docs\.google\.com(?:[/?#]|$)").expect("Invalid docs host regex")
});

/// File id from the path segment after `/d/`, optional gid from `gid=`.
static SPREADSHEET_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/d/([a-zA-Z0-9-_]+)(?:.*?gid=([0-9]+))?").expect("Invalid spreadsheet URL regex")
});

/// Identifiers resolved from a spreadsheet URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Resource id uniquely identifying the spreadsheet file.
    pub file_id: String,
    /// Id of an individual sheet (tab) inside the file, when present.
    pub gid: Option<String>,
}

/// Check whether a URL points at Google Docs.
///
/// True iff the scheme is `https` and the host is exactly `docs.google.com`.
pub fn is_valid_url(url: &str) -> bool {
    DOCS_HOST_REGEX.is_match(url)
}

/// Resolve a spreadsheet URL into its identifiers.
///
/// Supports the following URL formats:
/// - `https://docs.google.com/spreadsheets/d/<FILE-ID>/edit?gid=<GID>#gid=<GID>`
/// - `https://docs.google.com/spreadsheets/d/<FILE-ID>/edit?usp=sharing`
///
/// Returns `None` for anything else; validity is expressed in the return
/// type rather than an error.
///
/// # Examples
///
/// ```
/// use gsheet_tools::url_parser::resolve;
///
/// let url = resolve("https://docs.google.com/spreadsheets/d/12345/edit?gid=67890").unwrap();
/// assert_eq!(url.file_id, "12345");
/// assert_eq!(url.gid.as_deref(), Some("67890"));
/// ```
pub fn resolve(url: &str) -> Option<ResolvedUrl> {
    if !is_valid_url(url) || !url.contains("spreadsheets") {
        return None;
    }

    let captures = SPREADSHEET_URL_REGEX.captures(url)?;
    let file_id = captures.get(1)?.as_str().to_string();
    let gid = captures.get(2).map(|m| m.as_str().to_string());

    Some(ResolvedUrl { file_id, gid })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url() {
        assert!(is_valid_url(
            "https://docs.google.com/spreadsheets/d/12345/edit?usp=sharing"
        ));
        assert!(is_valid_url("https://docs.google.com"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(!is_valid_url("https://example.com/sheets/d/12345/edit"));
        assert!(!is_valid_url("https://docs.google.com.evil.com/spreadsheets"));
        assert!(!is_valid_url("https://drive.google.com/spreadsheets/d/12345"));
    }

    #[test]
    fn test_invalid_scheme() {
        assert!(!is_valid_url("http://docs.google.com/spreadsheets/d/12345"));
        assert!(!is_valid_url("ftp://docs.google.com/spreadsheets/d/12345"));
    }

    #[test]
    fn test_resolve_with_gid() {
        let url = "https://docs.google.com/spreadsheets/d/12345/edit?gid=67890#gid=67890";
        let resolved = resolve(url).unwrap();
        assert_eq!(resolved.file_id, "12345");
        assert_eq!(resolved.gid.as_deref(), Some("67890"));
    }

    #[test]
    fn test_resolve_without_gid() {
        let url = "https://docs.google.com/spreadsheets/d/12345/edit?usp=sharing";
        let resolved = resolve(url).unwrap();
        assert_eq!(resolved.file_id, "12345");
        assert_eq!(resolved.gid, None);
    }

    #[test]
    fn test_resolve_invalid_url() {
        assert_eq!(resolve("https://example.com/sheets/d/12345/edit"), None);
    }

    #[test]
    fn test_resolve_non_spreadsheet_url() {
        assert_eq!(resolve("https://docs.google.com/document/d/12345/edit"), None);
    }
}
